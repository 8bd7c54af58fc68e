pub mod models;
pub mod repository;

pub use models::*;
pub use repository::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

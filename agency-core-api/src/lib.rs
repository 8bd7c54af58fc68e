pub mod config;
pub mod domain;
pub mod error;

pub use config::*;
pub use domain::*;
pub use error::*;

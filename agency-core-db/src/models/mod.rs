pub mod agent;
pub mod identifiable;

pub use agent::*;
pub use identifiable::*;

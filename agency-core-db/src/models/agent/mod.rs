pub mod agent;
pub mod agent_status;

pub use agent::*;
pub use agent_status::*;

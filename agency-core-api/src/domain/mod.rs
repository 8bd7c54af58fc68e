pub mod agent_code;
pub mod commission;
pub mod distribution;
pub mod registration;

pub use agent_code::*;
pub use commission::*;
pub use distribution::*;
pub use registration::*;

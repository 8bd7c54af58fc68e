pub mod distribution;
pub mod hierarchy;
pub mod lifecycle;
pub mod registration;
pub mod sales;
pub mod services;
pub mod telemetry;

pub use distribution::CommissionDistributor;
pub use hierarchy::{DescendantAgent, HierarchyWalker, TeamSummary, Upline};
pub use lifecycle::AgentLifecycle;
pub use registration::RegistrationService;
pub use sales::SalesService;
pub use services::AgencyServices;
pub use telemetry::init_tracing;

#[cfg(test)]
pub mod test_utils;

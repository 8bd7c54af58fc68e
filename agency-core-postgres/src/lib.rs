pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use postgres_repositories::{AgentRepositories, PostgresRepositories};
pub use repository::agent_repository::AgentRepositoryImpl;
pub use unit_of_work::Executor;

#[cfg(test)]
pub mod test_helper;

//! Test helper module for transaction-based test isolation
//!
//! Each test context runs inside a transaction that is rolled back when the
//! context is dropped, so tests never see each other's agents.

use crate::postgres_repositories::{AgentRepositories, PostgresRepositories};
use agency_core_api::DatabaseConfig;

pub struct TestContext {
    pub agent_repos: AgentRepositories,
}

impl TestContext {
    pub fn agent_repos(&self) -> &AgentRepositories {
        &self.agent_repos
    }
}

pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| DatabaseConfig::default().url);
    let config = DatabaseConfig {
        url: database_url,
        max_connections: 1,
        ..DatabaseConfig::default()
    };

    let repos = PostgresRepositories::connect(&config).await?;
    sqlx::migrate!().run(&**repos.pool()).await?;

    let agent_repos = repos.create_agent_repositories().await?;
    Ok(TestContext { agent_repos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_core_db::test_utils::create_test_agent;
    use agency_core_db::repository::create_batch::CreateBatch;
    use agency_core_db::repository::find_by_id::FindById;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let agent = create_test_agent("AG901", None);
        {
            let ctx = setup_test_context().await?;
            let agent_repo = &ctx.agent_repos().agent_repository;
            agent_repo.create_batch(vec![agent.clone()]).await?;
            assert!(agent_repo.find_by_id(agent.id).await?.is_some());
        } // Transaction is rolled back here when ctx is dropped

        let ctx = setup_test_context().await?;
        let agent_repo = &ctx.agent_repos().agent_repository;
        assert!(agent_repo.find_by_id(agent.id).await?.is_none());

        Ok(())
    }
}

use agency_core_api::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::repository::agent_repository::AgentRepositoryImpl;
use crate::unit_of_work::Executor;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;
        tracing::info!(max_connections = config.max_connections, "Connected to PostgreSQL");
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the agent repositories sharing a single transaction
    pub async fn create_agent_repositories(&self) -> Result<AgentRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(AgentRepositories {
            agent_repository: Arc::new(AgentRepositoryImpl::new(executor.clone())),
            executor,
        })
    }
}

/// Repositories of one session; dropped without `commit` the session rolls back
pub struct AgentRepositories {
    pub executor: Executor,
    pub agent_repository: Arc<AgentRepositoryImpl>,
}

impl AgentRepositories {
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.executor.commit().await
    }

    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        self.executor.rollback().await
    }
}

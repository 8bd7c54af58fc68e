use async_trait::async_trait;
use agency_core_db::models::agent::{AgentModel, AgentStatus};
use agency_core_db::repository::transition_status::TransitionStatus;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AgentRepositoryImpl;

#[async_trait]
impl TransitionStatus for AgentRepositoryImpl {
    async fn transition_status(
        &self,
        agent_id: Uuid,
        expected: AgentStatus,
        next: AgentStatus,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            "UPDATE agent SET status = $3 WHERE id = $1 AND status = $2 RETURNING *",
        )
        .bind(agent_id)
        .bind(expected)
        .bind(next);
        Ok(self.fetch_agents(query).await?.pop())
    }
}

use async_trait::async_trait;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::find_by_id::FindById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AgentRepositoryImpl;

#[async_trait]
impl FindById<AgentModel> for AgentRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM agent WHERE id = $1").bind(id);
        Ok(self.fetch_agents(query).await?.pop())
    }
}

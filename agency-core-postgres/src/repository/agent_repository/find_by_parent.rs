use async_trait::async_trait;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::find_by_parent::FindByParent;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AgentRepositoryImpl;

#[async_trait]
impl FindByParent for AgentRepositoryImpl {
    async fn find_by_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM agent WHERE parent_id = $1 ORDER BY code").bind(parent_id);
        self.fetch_agents(query).await
    }
}

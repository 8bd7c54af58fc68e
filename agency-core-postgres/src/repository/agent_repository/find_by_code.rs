use async_trait::async_trait;
use agency_core_api::AgentCode;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::find_by_code::FindByCode;
use std::error::Error;

use super::repo_impl::AgentRepositoryImpl;

#[async_trait]
impl FindByCode for AgentRepositoryImpl {
    async fn find_by_code(
        &self,
        code: &AgentCode,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query("SELECT * FROM agent WHERE code = $1").bind(code.as_str().to_string());
        Ok(self.fetch_agents(query).await?.pop())
    }
}

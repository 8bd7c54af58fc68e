use agency_core_api::AgentCode;
use async_trait::async_trait;

use crate::models::agent::AgentModel;

/// Lookup of an agent by its unique hierarchical code
#[async_trait]
pub trait FindByCode: Send + Sync {
    async fn find_by_code(
        &self,
        code: &AgentCode,
    ) -> Result<Option<AgentModel>, Box<dyn std::error::Error + Send + Sync>>;
}

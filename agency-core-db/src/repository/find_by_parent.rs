use async_trait::async_trait;
use uuid::Uuid;

use crate::models::agent::AgentModel;

/// Lookup of the direct children of an agent
#[async_trait]
pub trait FindByParent: Send + Sync {
    /// Returns every agent whose `parent_id` equals `parent_id`, ordered by code
    async fn find_by_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<AgentModel>, Box<dyn std::error::Error + Send + Sync>>;
}

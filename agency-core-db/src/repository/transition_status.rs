use async_trait::async_trait;
use uuid::Uuid;

use crate::models::agent::{AgentModel, AgentStatus};

/// Compare-and-set of an agent's status
#[async_trait]
pub trait TransitionStatus: Send + Sync {
    /// Moves the agent to `next` only if it is currently `expected`
    ///
    /// # Returns
    /// * `Ok(Some(agent))` - The agent with its new status
    /// * `Ok(None)` - No agent with `agent_id` is currently `expected`
    async fn transition_status(
        &self,
        agent_id: Uuid,
        expected: AgentStatus,
        next: AgentStatus,
    ) -> Result<Option<AgentModel>, Box<dyn std::error::Error + Send + Sync>>;
}

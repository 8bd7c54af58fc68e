use async_trait::async_trait;
use uuid::Uuid;

use crate::models::agent::AgentModel;

/// Atomic increment of an agent's sale counters
///
/// The status check and both increments happen in one step, so concurrent
/// sales never lose an increment and a sale never lands on an agent that was
/// suspended in the meantime.
#[async_trait]
pub trait RecordSale: Send + Sync {
    /// # Returns
    /// * `Ok(Some(agent))` - The agent after `policies_sold` (and `customer_count`
    ///   when `new_customer`) was incremented
    /// * `Ok(None)` - No `Active` agent with `agent_id` exists
    async fn record_sale(
        &self,
        agent_id: Uuid,
        new_customer: bool,
    ) -> Result<Option<AgentModel>, Box<dyn std::error::Error + Send + Sync>>;
}

use agency_core_api::AgentCode;
use async_trait::async_trait;

/// Atomic allocation of sibling sequence numbers for new agent codes
///
/// Implementations must hand out each `(parent, sequence)` pair at most once,
/// even under concurrent registrations. The first reservation under a parent
/// returns `max(existing sibling sequences) + 1`, i.e. 1 for a parent without
/// children. Reserved numbers are never reused, so a failed registration
/// leaves a gap.
#[async_trait]
pub trait ReserveNextSequence: Send + Sync {
    /// # Arguments
    /// * `parent_code` - The parent agent's code, `None` for root agents
    async fn reserve_next_sequence(
        &self,
        parent_code: Option<&AgentCode>,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>>;
}

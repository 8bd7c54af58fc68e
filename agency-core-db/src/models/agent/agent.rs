use agency_core_api::AgentCode;
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::agent::agent_status::AgentStatus;
use crate::models::identifiable::Identifiable;

/// Database model for Agent
/// Represents a sales partner positioned in the referral hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentModel {
    pub id: Uuid,

    /// Hierarchical code, unique across all agents
    pub code: AgentCode,

    pub display_name: HeaplessString<100>,
    pub email: Option<HeaplessString<100>>,
    pub phone: Option<HeaplessString<20>>,

    /// References AgentModel.id of the recruiting agent, None for root agents
    pub parent_id: Option<Uuid>,

    /// 1 for root agents, parent level + 1 otherwise, at most 3
    pub level: u8,

    /// Rate of the agent's level at registration time
    pub commission_rate: Decimal,

    pub wallet_balance: Decimal,
    pub lifetime_earnings: Decimal,

    pub customer_count: i32,
    pub policies_sold: i32,

    pub status: AgentStatus,
    pub joined_at: DateTime<Utc>,
}

impl AgentModel {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}

impl Identifiable for AgentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

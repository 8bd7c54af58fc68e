use agency_core_api::{rate_for_level, AgentCode};
use chrono::{SubsecRound, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::agent::{AgentModel, AgentStatus};

/// Active agent whose level follows from `code`
pub fn create_test_agent(code: &str, parent: Option<&AgentModel>) -> AgentModel {
    let code = AgentCode::parse(code).unwrap();
    let level = code.level();
    AgentModel {
        id: Uuid::new_v4(),
        display_name: HeaplessString::try_from(format!("Agent {code}").as_str()).unwrap(),
        code,
        email: None,
        phone: None,
        parent_id: parent.map(|p| p.id),
        level,
        commission_rate: rate_for_level(level),
        wallet_balance: Decimal::ZERO,
        lifetime_earnings: Decimal::ZERO,
        customer_count: 0,
        policies_sold: 0,
        status: AgentStatus::Active,
        // Postgres keeps microseconds
        joined_at: Utc::now().trunc_subsecs(6),
    }
}

/// root (AG001, level 1) -> mid (AG001-1, level 2) -> leaf (AG001-1-1, level 3)
pub fn create_test_chain() -> (AgentModel, AgentModel, AgentModel) {
    let root = create_test_agent("AG001", None);
    let mid = create_test_agent("AG001-1", Some(&root));
    let leaf = create_test_agent("AG001-1-1", Some(&mid));
    (root, mid, leaf)
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::agent_code::AgentCode;

/// One payout produced by a policy sale.
///
/// Entries are computed on demand and never persisted here; the ledger
/// receiving them is responsible for crediting wallets exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionDistributionEntry {
    pub agent_id: Uuid,
    pub code: AgentCode,
    pub level: u8,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Sum of all payouts of a distribution
pub fn total_payout(entries: &[CommissionDistributionEntry]) -> Decimal {
    entries.iter().map(|entry| entry.amount).sum()
}

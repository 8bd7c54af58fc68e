use agency_core_api::{ApiError, ApiResult, CommissionDistributionEntry, CommissionTable};
use agency_core_db::{AgentModel, AgentRepository, FindById};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::hierarchy::HierarchyWalker;

/// Computes the payouts owed for a single policy sale.
///
/// The seller and every agent in its upline earn their own level's rate on
/// the full premium.
pub struct CommissionDistributor<R: AgentRepository> {
    walker: HierarchyWalker<R>,
    table: CommissionTable,
}

impl<R: AgentRepository> CommissionDistributor<R> {
    pub fn new(walker: HierarchyWalker<R>, table: CommissionTable) -> Self {
        Self { walker, table }
    }

    pub fn table(&self) -> &CommissionTable {
        &self.table
    }

    /// Seller first, then its ancestors nearest first.
    ///
    /// An unknown seller yields an empty distribution rather than an error.
    pub async fn distribute(
        &self,
        premium: Decimal,
        selling_agent_id: Uuid,
    ) -> ApiResult<Vec<CommissionDistributionEntry>> {
        if premium <= Decimal::ZERO {
            return Err(ApiError::InvalidArgument(format!(
                "Premium must be positive, got {premium}"
            )));
        }

        let Some(seller) = self.walker.repository().find_by_id(selling_agent_id).await? else {
            warn!(%selling_agent_id, "Selling agent not found, no commission distributed");
            return Ok(Vec::new());
        };

        self.distribute_for(premium, seller).await
    }

    pub(crate) async fn distribute_for(
        &self,
        premium: Decimal,
        seller: AgentModel,
    ) -> ApiResult<Vec<CommissionDistributionEntry>> {
        let upline = self.walker.ancestors_of(&seller).await?;
        let entries: Vec<CommissionDistributionEntry> = std::iter::once(seller)
            .chain(upline)
            .map(|agent| self.entry_for(agent, premium))
            .collect();

        debug!(entries = entries.len(), %premium, "Computed commission distribution");
        Ok(entries)
    }

    fn entry_for(&self, agent: AgentModel, premium: Decimal) -> CommissionDistributionEntry {
        CommissionDistributionEntry {
            agent_id: agent.id,
            level: agent.level,
            rate: self.table.rate_for_level(agent.level),
            amount: self.table.commission_for_level(premium, agent.level),
            code: agent.code,
        }
    }
}

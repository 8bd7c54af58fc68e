use agency_core_api::{ApiError, ApiResult, CommissionDistributionEntry};
use agency_core_db::{AgentRepository, RecordSale};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::distribution::CommissionDistributor;
use crate::hierarchy::HierarchyWalker;

/// Books a policy sale against the selling agent's counters.
///
/// Crediting the returned payouts to wallets is left to the ledger.
pub struct SalesService<R: AgentRepository> {
    walker: HierarchyWalker<R>,
    distributor: CommissionDistributor<R>,
}

impl<R: AgentRepository> SalesService<R> {
    pub fn new(walker: HierarchyWalker<R>, distributor: CommissionDistributor<R>) -> Self {
        Self { walker, distributor }
    }

    pub async fn record_policy_sale(
        &self,
        selling_agent_id: Uuid,
        premium: Decimal,
        new_customer: bool,
    ) -> ApiResult<Vec<CommissionDistributionEntry>> {
        if premium <= Decimal::ZERO {
            return Err(ApiError::InvalidArgument(format!(
                "Premium must be positive, got {premium}"
            )));
        }

        let seller = self.walker.require_agent(selling_agent_id).await?;
        if !seller.is_active() {
            return Err(ApiError::InvalidArgument(format!(
                "Agent {} is {} and cannot sell policies",
                seller.code, seller.status
            )));
        }

        // Distribution first: a corrupt upline must not leave counters bumped
        let entries = self.distributor.distribute_for(premium, seller.clone()).await?;

        let recorded = self
            .walker
            .repository()
            .record_sale(selling_agent_id, new_customer)
            .await?;
        let Some(seller) = recorded else {
            // Status changed after the first read
            let current = self.walker.require_agent(selling_agent_id).await?;
            return Err(ApiError::InvalidArgument(format!(
                "Agent {} is {} and cannot sell policies",
                current.code, current.status
            )));
        };

        info!(
            code = %seller.code,
            %premium,
            policies_sold = seller.policies_sold,
            payouts = entries.len(),
            "Recorded policy sale"
        );
        Ok(entries)
    }
}

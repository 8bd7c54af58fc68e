use agency_core_api::{AgencyConfig, ApiResult, CommissionTable};
use agency_core_db::AgentRepository;
use std::sync::Arc;

use crate::distribution::CommissionDistributor;
use crate::hierarchy::HierarchyWalker;
use crate::lifecycle::AgentLifecycle;
use crate::registration::RegistrationService;
use crate::sales::SalesService;

/// All agency services sharing one repository
pub struct AgencyServices<R: AgentRepository> {
    pub hierarchy: HierarchyWalker<R>,
    pub distributor: CommissionDistributor<R>,
    pub registration: RegistrationService<R>,
    pub lifecycle: AgentLifecycle<R>,
    pub sales: SalesService<R>,
}

impl<R: AgentRepository> AgencyServices<R> {
    pub fn new(repo: Arc<R>, table: CommissionTable) -> Self {
        let hierarchy = HierarchyWalker::new(repo.clone());
        Self {
            distributor: CommissionDistributor::new(hierarchy.clone(), table),
            registration: RegistrationService::new(repo.clone(), table),
            lifecycle: AgentLifecycle::new(repo),
            sales: SalesService::new(
                hierarchy.clone(),
                CommissionDistributor::new(hierarchy.clone(), table),
            ),
            hierarchy,
        }
    }

    /// Builds the services with the commission table from `config`
    pub fn from_config(repo: Arc<R>, config: &AgencyConfig) -> ApiResult<Self> {
        let table = CommissionTable::try_from(&config.commission)?;
        Ok(Self::new(repo, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_core_api::{ApiError, RegisterAgentRequest};
    use agency_core_db::InMemoryAgentRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_register_approve_and_sell() {
        let repo = Arc::new(InMemoryAgentRepository::new());
        let services = AgencyServices::from_config(repo, &AgencyConfig::default()).unwrap();

        let root = services.registration.register(RegisterAgentRequest::new("Root")).await.unwrap();
        let mid = services
            .registration
            .register(RegisterAgentRequest::new("Mid").with_parent(root.code.as_str()))
            .await
            .unwrap();
        let leaf = services
            .registration
            .register(RegisterAgentRequest::new("Leaf").with_parent(mid.code.as_str()))
            .await
            .unwrap();
        assert_eq!(leaf.code.as_str(), "AG001-1-1");

        let result = services
            .registration
            .register(RegisterAgentRequest::new("Too deep").with_parent(leaf.code.as_str()))
            .await;
        assert!(matches!(result, Err(ApiError::DepthExceeded(_))));

        services.lifecycle.approve(leaf.id).await.unwrap();
        let entries = services
            .sales
            .record_policy_sale(leaf.id, Decimal::from(2000), true)
            .await
            .unwrap();
        let amounts: Vec<Decimal> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![Decimal::from(100), Decimal::from(200), Decimal::from(300)]);

        let team = services.hierarchy.team_summary(root.id).await.unwrap();
        assert_eq!(team.total_members, 2);
        assert_eq!(team.policies_sold, 1);
        assert_eq!(team.customers, 1);
    }

    #[tokio::test]
    async fn test_configured_rates_drive_distribution() {
        let mut config = AgencyConfig::default();
        config.commission.level_1_rate = Decimal::from_str("0.20").unwrap();
        let repo = Arc::new(InMemoryAgentRepository::new());
        let services = AgencyServices::from_config(repo, &config).unwrap();

        let root = services.registration.register(RegisterAgentRequest::new("Root")).await.unwrap();
        assert_eq!(root.commission_rate, Decimal::from_str("0.20").unwrap());

        let entries = services.distributor.distribute(Decimal::from(1000), root.id).await.unwrap();
        assert_eq!(entries[0].amount, Decimal::from(200));
    }

    #[test]
    fn test_invalid_configured_rate() {
        let mut config = AgencyConfig::default();
        config.commission.level_3_rate = Decimal::from(3);
        let repo = Arc::new(InMemoryAgentRepository::new());
        assert!(matches!(
            AgencyServices::from_config(repo, &config),
            Err(ApiError::ConfigError(_))
        ));
    }
}

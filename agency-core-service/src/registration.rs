use agency_core_api::{
    generate_code, AgentCode, ApiError, ApiResult, CommissionTable, RegisterAgentRequest, MAX_LEVEL,
};
use agency_core_db::{
    AgentModel, AgentRepository, AgentStatus, CreateBatch, FindByCode, ReserveNextSequence,
};
use chrono::Utc;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Creates new agents below an optional recruiting agent.
///
/// This is the only place `AgentModel` records are constructed. A failed
/// registration writes no agent; at most a reserved sequence number is
/// consumed.
pub struct RegistrationService<R: AgentRepository> {
    repo: Arc<R>,
    table: CommissionTable,
}

impl<R: AgentRepository> RegistrationService<R> {
    pub fn new(repo: Arc<R>, table: CommissionTable) -> Self {
        Self { repo, table }
    }

    pub async fn register(&self, request: RegisterAgentRequest) -> ApiResult<AgentModel> {
        request.validate()?;

        let parent = match request.normalized_parent_code() {
            Some(code) => Some(self.resolve_parent(code).await?),
            None => None,
        };

        let level = match &parent {
            Some(parent) if parent.level >= MAX_LEVEL => {
                return Err(ApiError::DepthExceeded(format!(
                    "Agent {} is at level {}, recruits would exceed level {MAX_LEVEL}",
                    parent.code, parent.level
                )));
            }
            Some(parent) => parent.level + 1,
            None => 1,
        };

        let display_name: HeaplessString<100> = bounded("display_name", &request.display_name)?;
        let email: Option<HeaplessString<100>> =
            request.email.as_deref().map(|v| bounded("email", v)).transpose()?;
        let phone: Option<HeaplessString<20>> =
            request.phone.as_deref().map(|v| bounded("phone", v)).transpose()?;

        let parent_code = parent.as_ref().map(|p| &p.code);
        let sequence = self.repo.reserve_next_sequence(parent_code).await?;
        let code = generate_code(parent_code, sequence)?;
        debug!(%code, sequence, "Reserved agent code");

        let agent = AgentModel {
            id: Uuid::new_v4(),
            code,
            display_name,
            email,
            phone,
            parent_id: parent.as_ref().map(|p| p.id),
            level,
            commission_rate: self.table.rate_for_level(level),
            wallet_balance: Decimal::ZERO,
            lifetime_earnings: Decimal::ZERO,
            customer_count: 0,
            policies_sold: 0,
            status: AgentStatus::PendingApproval,
            joined_at: Utc::now(),
        };

        let agent = self
            .repo
            .create_batch(vec![agent])
            .await?
            .pop()
            .ok_or_else(|| ApiError::InternalError("Repository returned no agent".to_string()))?;

        info!(
            agent_id = %agent.id,
            code = %agent.code,
            level = agent.level,
            "Registered agent pending approval"
        );
        Ok(agent)
    }

    async fn resolve_parent(&self, code: &str) -> ApiResult<AgentModel> {
        let code = AgentCode::parse(code)?;
        let parent = self
            .repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Parent agent with code {code}")))?;

        if parent.code.level() != parent.level {
            return Err(ApiError::DataIntegrity(format!(
                "Agent {} is stored at level {} but its code encodes level {}",
                parent.code,
                parent.level,
                parent.code.level()
            )));
        }
        Ok(parent)
    }
}

fn bounded<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::try_from(value)
        .map_err(|_| ApiError::InvalidArgument(format!("{field} exceeds {N} bytes")))
}

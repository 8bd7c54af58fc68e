use agency_core_api::{ApiError, ApiResult};
use agency_core_db::{AgentModel, AgentRepository, AgentStatus, FindById, TransitionStatus};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Status transitions of registered agents
pub struct AgentLifecycle<R: AgentRepository> {
    repo: Arc<R>,
}

impl<R: AgentRepository> AgentLifecycle<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Pending approval -> active
    pub async fn approve(&self, agent_id: Uuid) -> ApiResult<AgentModel> {
        self.transition(agent_id, AgentStatus::Active, AgentStatus::PendingApproval)
            .await
    }

    pub async fn suspend(&self, agent_id: Uuid) -> ApiResult<AgentModel> {
        self.transition(agent_id, AgentStatus::Suspended, AgentStatus::Active)
            .await
    }

    pub async fn reactivate(&self, agent_id: Uuid) -> ApiResult<AgentModel> {
        self.transition(agent_id, AgentStatus::Active, AgentStatus::Suspended)
            .await
    }

    async fn transition(
        &self,
        agent_id: Uuid,
        next: AgentStatus,
        expected: AgentStatus,
    ) -> ApiResult<AgentModel> {
        if !expected.can_transition_to(next) {
            return Err(ApiError::InvalidArgument(format!(
                "Agents cannot move from {expected} to {next}"
            )));
        }

        match self.repo.transition_status(agent_id, expected, next).await? {
            Some(agent) => {
                info!(code = %agent.code, from = %expected, to = %next, "Agent status changed");
                Ok(agent)
            }
            None => {
                // Nothing changed; report why
                let agent = self
                    .repo
                    .find_by_id(agent_id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound(format!("Agent {agent_id}")))?;
                Err(ApiError::InvalidArgument(format!(
                    "Agent {} is {}, cannot move to {next}",
                    agent.code, agent.status
                )))
            }
        }
    }
}

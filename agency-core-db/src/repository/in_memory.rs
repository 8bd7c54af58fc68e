//! In-memory agent store
//!
//! Backs tests and local tooling. Every trait method takes the lock exactly
//! once, so each call is atomic with respect to the others.

use agency_core_api::AgentCode;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use crate::models::agent::{AgentModel, AgentStatus};
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::{
    CreateBatch, FindByCode, FindById, FindByParent, ListAll, RecordSale, ReserveNextSequence,
    TransitionStatus, UpdateBatch,
};

/// Sequence counter key of root agents
const ROOT_SEQUENCE_KEY: &str = "";

#[derive(Default)]
struct InMemoryState {
    agents: HashMap<Uuid, AgentModel>,
    /// Last reserved sequence per parent code
    sequences: HashMap<String, u32>,
}

impl InMemoryState {
    fn highest_sibling_sequence(&self, parent_code: Option<&AgentCode>) -> u32 {
        self.agents
            .values()
            .filter(|agent| agent.code.parent().as_ref() == parent_code)
            .map(|agent| agent.code.sequence())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Default)]
pub struct InMemoryAgentRepository {
    state: RwLock<InMemoryState>,
}

impl InMemoryAgentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store without any validation of parent links
    pub fn with_agents(agents: Vec<AgentModel>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.write();
            for agent in agents {
                state.agents.insert(agent.id, agent);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.state.read().agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().agents.is_empty()
    }

    /// Copy of every stored agent, ordered by code
    pub fn snapshot(&self) -> Vec<AgentModel> {
        let state = self.state.read();
        let mut agents: Vec<AgentModel> = state.agents.values().cloned().collect();
        agents.sort_by(|a, b| a.code.cmp(&b.code));
        agents
    }
}

#[async_trait]
impl FindById<AgentModel> for InMemoryAgentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.state.read().agents.get(&id).cloned())
    }
}

#[async_trait]
impl FindByCode for InMemoryAgentRepository {
    async fn find_by_code(
        &self,
        code: &AgentCode,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.read();
        Ok(state.agents.values().find(|agent| &agent.code == code).cloned())
    }
}

#[async_trait]
impl FindByParent for InMemoryAgentRepository {
    async fn find_by_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.read();
        let mut children: Vec<AgentModel> = state
            .agents
            .values()
            .filter(|agent| agent.parent_id == Some(parent_id))
            .cloned()
            .collect();
        children.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(children)
    }
}

#[async_trait]
impl ListAll<AgentModel> for InMemoryAgentRepository {
    async fn list_all(&self, page: PageRequest) -> Result<Page<AgentModel>, Box<dyn Error + Send + Sync>> {
        Ok(page.slice(self.snapshot()))
    }
}

#[async_trait]
impl CreateBatch<AgentModel> for InMemoryAgentRepository {
    async fn create_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut state = self.state.write();

        // Check the whole batch before touching the map
        for (index, item) in items.iter().enumerate() {
            if items[..index]
                .iter()
                .any(|other| other.id == item.id || other.code == item.code)
            {
                return Err(format!("Agent {} appears twice in batch", item.code).into());
            }
            if state.agents.contains_key(&item.id) {
                return Err(format!("Duplicate agent id {}", item.id).into());
            }
            if state.agents.values().any(|agent| agent.code == item.code) {
                return Err(format!("Duplicate agent code {}", item.code).into());
            }
        }

        for item in &items {
            state.agents.insert(item.id, item.clone());
        }
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<AgentModel> for InMemoryAgentRepository {
    async fn update_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut state = self.state.write();

        if let Some(missing) = items.iter().find(|item| !state.agents.contains_key(&item.id)) {
            return Err(format!("Agent {} does not exist", missing.id).into());
        }
        if let Some(clash) = items.iter().find(|item| {
            state
                .agents
                .values()
                .any(|agent| agent.id != item.id && agent.code == item.code)
        }) {
            return Err(format!("Duplicate agent code {}", clash.code).into());
        }

        for item in &items {
            state.agents.insert(item.id, item.clone());
        }
        Ok(items)
    }
}

#[async_trait]
impl ReserveNextSequence for InMemoryAgentRepository {
    async fn reserve_next_sequence(
        &self,
        parent_code: Option<&AgentCode>,
    ) -> Result<u32, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.write();
        let key = parent_code
            .map(|code| code.as_str().to_string())
            .unwrap_or_else(|| ROOT_SEQUENCE_KEY.to_string());

        let reserved = state.sequences.get(&key).copied().unwrap_or(0);
        let existing = state.highest_sibling_sequence(parent_code);
        let next = reserved
            .max(existing)
            .checked_add(1)
            .ok_or("Agent code sequence overflow")?;

        state.sequences.insert(key, next);
        Ok(next)
    }
}

#[async_trait]
impl RecordSale for InMemoryAgentRepository {
    async fn record_sale(
        &self,
        agent_id: Uuid,
        new_customer: bool,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.write();
        let Some(agent) = state
            .agents
            .get_mut(&agent_id)
            .filter(|agent| agent.status == AgentStatus::Active)
        else {
            return Ok(None);
        };

        let policies_sold = agent
            .policies_sold
            .checked_add(1)
            .ok_or("Policies sold counter overflow")?;
        let customer_count = agent
            .customer_count
            .checked_add(i32::from(new_customer))
            .ok_or("Customer counter overflow")?;
        agent.policies_sold = policies_sold;
        agent.customer_count = customer_count;
        Ok(Some(agent.clone()))
    }
}

#[async_trait]
impl TransitionStatus for InMemoryAgentRepository {
    async fn transition_status(
        &self,
        agent_id: Uuid,
        expected: AgentStatus,
        next: AgentStatus,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.write();
        match state.agents.get_mut(&agent_id) {
            Some(agent) if agent.status == expected => {
                agent.status = next;
                Ok(Some(agent.clone()))
            }
            _ => Ok(None),
        }
    }
}

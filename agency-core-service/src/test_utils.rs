use agency_core_api::AgentCode;
use agency_core_db::{
    AgentModel, AgentStatus, CreateBatch, FindByCode, FindById, FindByParent, InMemoryAgentRepository,
    ListAll, Page, PageRequest, RecordSale, ReserveNextSequence, TransitionStatus, UpdateBatch,
};
use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

pub use agency_core_db::test_utils::{create_test_agent, create_test_chain};

/// Two agents with corrupted parent links pointing at each other (A -> B -> A)
pub fn create_cyclic_pair() -> (AgentModel, AgentModel) {
    let mut a = create_test_agent("AG008", None);
    let mut b = create_test_agent("AG009", None);
    a.parent_id = Some(b.id);
    b.parent_id = Some(a.id);
    (a, b)
}

/// Three agents whose parent links form a ring (A -> B -> C -> A)
pub fn create_cyclic_triple() -> (AgentModel, AgentModel, AgentModel) {
    let mut a = create_test_agent("AG011", None);
    let mut b = create_test_agent("AG012", None);
    let mut c = create_test_agent("AG013", None);
    a.parent_id = Some(b.id);
    b.parent_id = Some(c.id);
    c.parent_id = Some(a.id);
    (a, b, c)
}

pub fn repository_with(agents: Vec<AgentModel>) -> Arc<InMemoryAgentRepository> {
    Arc::new(InMemoryAgentRepository::with_agents(agents))
}

/// In-memory store that yields to the scheduler before every read, the way a
/// networked store suspends, so joined futures interleave between calls
pub struct YieldingRepository {
    inner: InMemoryAgentRepository,
}

impl YieldingRepository {
    pub fn with_agents(agents: Vec<AgentModel>) -> Self {
        Self {
            inner: InMemoryAgentRepository::with_agents(agents),
        }
    }
}

#[async_trait]
impl FindById<AgentModel> for YieldingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        tokio::task::yield_now().await;
        self.inner.find_by_id(id).await
    }
}

#[async_trait]
impl FindByCode for YieldingRepository {
    async fn find_by_code(
        &self,
        code: &AgentCode,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        tokio::task::yield_now().await;
        self.inner.find_by_code(code).await
    }
}

#[async_trait]
impl FindByParent for YieldingRepository {
    async fn find_by_parent(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        tokio::task::yield_now().await;
        self.inner.find_by_parent(parent_id).await
    }
}

#[async_trait]
impl ListAll<AgentModel> for YieldingRepository {
    async fn list_all(&self, page: PageRequest) -> Result<Page<AgentModel>, Box<dyn Error + Send + Sync>> {
        tokio::task::yield_now().await;
        self.inner.list_all(page).await
    }
}

#[async_trait]
impl CreateBatch<AgentModel> for YieldingRepository {
    async fn create_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.inner.create_batch(items).await
    }
}

#[async_trait]
impl UpdateBatch<AgentModel> for YieldingRepository {
    async fn update_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.inner.update_batch(items).await
    }
}

#[async_trait]
impl ReserveNextSequence for YieldingRepository {
    async fn reserve_next_sequence(
        &self,
        parent_code: Option<&AgentCode>,
    ) -> Result<u32, Box<dyn Error + Send + Sync>> {
        self.inner.reserve_next_sequence(parent_code).await
    }
}

#[async_trait]
impl RecordSale for YieldingRepository {
    async fn record_sale(
        &self,
        agent_id: Uuid,
        new_customer: bool,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.inner.record_sale(agent_id, new_customer).await
    }
}

#[async_trait]
impl TransitionStatus for YieldingRepository {
    async fn transition_status(
        &self,
        agent_id: Uuid,
        expected: AgentStatus,
        next: AgentStatus,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.inner.transition_status(agent_id, expected, next).await
    }
}

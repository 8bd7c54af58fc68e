use agency_core_api::{AgentCode, ApiError, ApiResult, MAX_LEVEL};
use agency_core_db::{AgentModel, AgentRepository, FindByCode, FindById, FindByParent};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// At most two agents sit above a level 3 agent
pub const MAX_UPLINE_HOPS: usize = (MAX_LEVEL - 1) as usize;

/// A member of an agent's downline
#[derive(Debug, Clone, PartialEq)]
pub struct DescendantAgent {
    pub agent: AgentModel,
    /// Distance from the queried agent; direct recruits are at depth 0
    pub depth: u32,
}

/// An agent together with its upline, nearest parent first
#[derive(Debug, Clone, PartialEq)]
pub struct Upline {
    pub agent: AgentModel,
    pub ancestors: Vec<AgentModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub agent_id: Uuid,
    pub total_members: usize,
    /// `members_by_depth[d]` counts the downline members at depth `d`
    pub members_by_depth: Vec<usize>,
    pub policies_sold: i64,
    pub customers: i64,
}

/// Walks parent links of the agent hierarchy in both directions.
///
/// Every walk tracks visited agents; reaching an agent twice means the
/// parent links form a cycle and is reported as `DataIntegrity`.
pub struct HierarchyWalker<R: AgentRepository> {
    repo: Arc<R>,
}

impl<R: AgentRepository> Clone for HierarchyWalker<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: AgentRepository> HierarchyWalker<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// All agents whose parent chain reaches `agent_id`, breadth first
    pub async fn descendants(&self, agent_id: Uuid) -> ApiResult<Vec<DescendantAgent>> {
        let agent = self.require_agent(agent_id).await?;

        let mut visited = HashSet::from([agent.id]);
        let mut queue = VecDeque::from([(agent.id, 0u32)]);
        let mut team = Vec::new();

        while let Some((parent_id, depth)) = queue.pop_front() {
            for child in self.repo.find_by_parent(parent_id).await? {
                if !visited.insert(child.id) {
                    error!(
                        agent = %agent.code,
                        repeated = %child.code,
                        "Cycle detected while walking downline"
                    );
                    return Err(ApiError::DataIntegrity(format!(
                        "Cycle detected in downline of {}: agent {} reached twice",
                        agent.code, child.code
                    )));
                }
                queue.push_back((child.id, depth + 1));
                team.push(DescendantAgent { agent: child, depth });
            }
        }

        debug!(agent = %agent.code, members = team.len(), "Walked downline");
        Ok(team)
    }

    /// Upline of `agent_id`, nearest parent first
    pub async fn ancestors(&self, agent_id: Uuid) -> ApiResult<Vec<AgentModel>> {
        let agent = self.require_agent(agent_id).await?;
        self.ancestors_of(&agent).await
    }

    /// Agents above the cap are not returned, but the walk still follows
    /// their parent links so that a ring of any length is reported
    pub(crate) async fn ancestors_of(&self, agent: &AgentModel) -> ApiResult<Vec<AgentModel>> {
        let mut visited = HashSet::from([agent.id]);
        let mut upline = Vec::with_capacity(MAX_UPLINE_HOPS);
        let mut truncated = 0usize;
        let mut next = agent.parent_id;

        while let Some(parent_id) = next {
            if !visited.insert(parent_id) {
                error!(agent = %agent.code, %parent_id, "Cycle detected while walking upline");
                return Err(ApiError::DataIntegrity(format!(
                    "Cycle detected in upline of {}: agent {parent_id} reached twice",
                    agent.code
                )));
            }

            let parent = self.repo.find_by_id(parent_id).await?.ok_or_else(|| {
                ApiError::DataIntegrity(format!(
                    "Upline of {} references missing agent {parent_id}",
                    agent.code
                ))
            })?;
            next = parent.parent_id;
            if upline.len() < MAX_UPLINE_HOPS {
                upline.push(parent);
            } else {
                truncated += 1;
            }
        }

        if truncated > 0 {
            warn!(
                agent = %agent.code,
                ignored = truncated,
                "Upline exceeds {MAX_UPLINE_HOPS} hops, ignoring agents above"
            );
        }
        Ok(upline)
    }

    /// Resolves `code` and returns the agent with its upline
    pub async fn upline_by_code(&self, code: &str) -> ApiResult<Upline> {
        let code = AgentCode::parse(code.trim())?;
        let agent = self
            .repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Agent with code {code}")))?;
        let ancestors = self.ancestors_of(&agent).await?;
        Ok(Upline { agent, ancestors })
    }

    pub async fn team_summary(&self, agent_id: Uuid) -> ApiResult<TeamSummary> {
        let team = self.descendants(agent_id).await?;

        let mut members_by_depth: Vec<usize> = Vec::new();
        let mut policies_sold = 0i64;
        let mut customers = 0i64;
        for member in &team {
            let depth = member.depth as usize;
            if members_by_depth.len() <= depth {
                members_by_depth.resize(depth + 1, 0);
            }
            members_by_depth[depth] += 1;
            policies_sold += i64::from(member.agent.policies_sold);
            customers += i64::from(member.agent.customer_count);
        }

        Ok(TeamSummary {
            agent_id,
            total_members: team.len(),
            members_by_depth,
            policies_sold,
            customers,
        })
    }

    pub(crate) async fn require_agent(&self, agent_id: Uuid) -> ApiResult<AgentModel> {
        self.repo
            .find_by_id(agent_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Agent {agent_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_cyclic_pair, create_cyclic_triple, create_test_agent, create_test_chain, repository_with,
    };

    #[tokio::test]
    async fn test_ancestors_nearest_first() {
        let (root, mid, leaf) = create_test_chain();
        let walker = HierarchyWalker::new(repository_with(vec![root.clone(), mid.clone(), leaf.clone()]));

        let upline = walker.ancestors(leaf.id).await.unwrap();
        assert_eq!(upline, vec![mid.clone(), root.clone()]);

        assert_eq!(walker.ancestors(mid.id).await.unwrap(), vec![root.clone()]);
        assert!(walker.ancestors(root.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_descendants_carry_depth() {
        let (root, mid, leaf) = create_test_chain();
        let walker = HierarchyWalker::new(repository_with(vec![root.clone(), mid.clone(), leaf.clone()]));

        let team = walker.descendants(root.id).await.unwrap();
        assert_eq!(team.len(), 2);
        assert!(team.iter().any(|m| m.agent.id == mid.id && m.depth == 0));
        assert!(team.iter().any(|m| m.agent.id == leaf.id && m.depth == 1));

        assert!(walker.descendants(leaf.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_agent_is_not_found() {
        let walker = HierarchyWalker::new(repository_with(vec![]));
        let unknown = Uuid::new_v4();

        assert!(matches!(walker.ancestors(unknown).await, Err(ApiError::NotFound(_))));
        assert!(matches!(walker.descendants(unknown).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cycle_is_data_integrity_error() {
        let (a, b) = create_cyclic_pair();
        let walker = HierarchyWalker::new(repository_with(vec![a.clone(), b.clone()]));

        assert!(matches!(walker.descendants(a.id).await, Err(ApiError::DataIntegrity(_))));
        assert!(matches!(walker.ancestors(a.id).await, Err(ApiError::DataIntegrity(_))));
        assert!(matches!(walker.ancestors(b.id).await, Err(ApiError::DataIntegrity(_))));
    }

    #[tokio::test]
    async fn test_self_parent_is_data_integrity_error() {
        let mut agent = create_test_agent("AG003", None);
        agent.parent_id = Some(agent.id);
        let walker = HierarchyWalker::new(repository_with(vec![agent.clone()]));

        assert!(matches!(walker.ancestors(agent.id).await, Err(ApiError::DataIntegrity(_))));
        assert!(matches!(walker.descendants(agent.id).await, Err(ApiError::DataIntegrity(_))));
    }

    #[tokio::test]
    async fn test_dangling_parent_is_data_integrity_error() {
        let root = create_test_agent("AG001", None);
        let orphan = create_test_agent("AG001-1", Some(&root));
        let walker = HierarchyWalker::new(repository_with(vec![orphan.clone()]));

        assert!(matches!(walker.ancestors(orphan.id).await, Err(ApiError::DataIntegrity(_))));
    }

    #[tokio::test]
    async fn test_upline_is_capped_at_two_hops() {
        // Corrupt chain four agents deep; only the two nearest count
        let (root, mid, leaf) = create_test_chain();
        let mut below = create_test_agent("AG001-1-1-1", Some(&leaf));
        below.level = 3;
        let walker = HierarchyWalker::new(repository_with(vec![
            root,
            mid.clone(),
            leaf.clone(),
            below.clone(),
        ]));

        let upline = walker.ancestors(below.id).await.unwrap();
        assert_eq!(upline, vec![leaf, mid]);
    }

    #[tokio::test]
    async fn test_upline_by_code() {
        let (root, mid, leaf) = create_test_chain();
        let walker = HierarchyWalker::new(repository_with(vec![root.clone(), mid.clone(), leaf.clone()]));

        let upline = walker.upline_by_code(" AG001-1-1 ").await.unwrap();
        assert_eq!(upline.agent.id, leaf.id);
        assert_eq!(upline.ancestors, vec![mid, root]);

        assert!(matches!(walker.upline_by_code("AG00").await, Err(ApiError::InvalidArgument(_))));
        assert!(matches!(walker.upline_by_code("AG404").await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_team_summary() {
        let (root, mut mid, mut leaf) = create_test_chain();
        let mut sibling = create_test_agent("AG001-2", Some(&root));
        mid.policies_sold = 4;
        mid.customer_count = 3;
        leaf.policies_sold = 2;
        leaf.customer_count = 2;
        sibling.policies_sold = 1;
        sibling.customer_count = 1;
        let walker = HierarchyWalker::new(repository_with(vec![root.clone(), mid, leaf, sibling]));

        let summary = walker.team_summary(root.id).await.unwrap();
        assert_eq!(summary.total_members, 3);
        assert_eq!(summary.members_by_depth, vec![2, 1]);
        assert_eq!(summary.policies_sold, 7);
        assert_eq!(summary.customers, 6);
    }

    #[tokio::test]
    async fn test_ring_of_three_is_data_integrity_error() {
        let (a, b, c) = create_cyclic_triple();
        let walker = HierarchyWalker::new(repository_with(vec![a.clone(), b.clone(), c.clone()]));

        for agent in [&a, &b, &c] {
            assert!(matches!(walker.ancestors(agent.id).await, Err(ApiError::DataIntegrity(_))));
            assert!(matches!(walker.descendants(agent.id).await, Err(ApiError::DataIntegrity(_))));
        }
        assert!(matches!(walker.upline_by_code("AG011").await, Err(ApiError::DataIntegrity(_))));
    }

    #[tokio::test]
    async fn test_ring_beyond_hop_cap_is_data_integrity_error() {
        // A -> B -> C -> D -> A; the repeat is only seen past the second hop
        let mut ring: Vec<AgentModel> = ["AG021", "AG022", "AG023", "AG024"]
            .into_iter()
            .map(|code| create_test_agent(code, None))
            .collect();
        let ids: Vec<Uuid> = ring.iter().map(|agent| agent.id).collect();
        for (i, agent) in ring.iter_mut().enumerate() {
            agent.parent_id = Some(ids[(i + 1) % ids.len()]);
        }
        let first = ring[0].id;
        let walker = HierarchyWalker::new(repository_with(ring));

        assert!(matches!(walker.ancestors(first).await, Err(ApiError::DataIntegrity(_))));
    }
}

use async_trait::async_trait;
use agency_core_db::models::agent::{AgentModel, AgentStatus};
use agency_core_db::repository::record_sale::RecordSale;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AgentRepositoryImpl;

#[async_trait]
impl RecordSale for AgentRepositoryImpl {
    async fn record_sale(
        &self,
        agent_id: Uuid,
        new_customer: bool,
    ) -> Result<Option<AgentModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE agent
            SET policies_sold = policies_sold + 1,
                customer_count = customer_count + $2
            WHERE id = $1 AND status = $3
            RETURNING *
            "#,
        )
        .bind(agent_id)
        .bind(i32::from(new_customer))
        .bind(AgentStatus::Active);
        Ok(self.fetch_agents(query).await?.pop())
    }
}

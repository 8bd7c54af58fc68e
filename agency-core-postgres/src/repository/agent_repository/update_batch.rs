use async_trait::async_trait;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::update_batch::UpdateBatch;
use std::error::Error;

use super::repo_impl::AgentRepositoryImpl;

impl AgentRepositoryImpl {
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for item in &items {
            let result = sqlx::query(
                r#"
                UPDATE agent
                SET code = $2, display_name = $3, email = $4, phone = $5, parent_id = $6,
                    level = $7, commission_rate = $8, wallet_balance = $9,
                    lifetime_earnings = $10, customer_count = $11, policies_sold = $12,
                    status = $13, joined_at = $14
                WHERE id = $1
                "#,
            )
            .bind(item.id)
            .bind(item.code.as_str())
            .bind(item.display_name.as_str())
            .bind(item.email.as_ref().map(|s| s.as_str()))
            .bind(item.phone.as_ref().map(|s| s.as_str()))
            .bind(item.parent_id)
            .bind(i16::from(item.level))
            .bind(item.commission_rate)
            .bind(item.wallet_balance)
            .bind(item.lifetime_earnings)
            .bind(item.customer_count)
            .bind(item.policies_sold)
            .bind(item.status)
            .bind(item.joined_at)
            .execute(&mut **transaction)
            .await?;

            if result.rows_affected() != 1 {
                return Err(format!("Agent {} does not exist", item.id).into());
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<AgentModel> for AgentRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.update_batch_impl(items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use agency_core_db::models::agent::AgentStatus;
    use agency_core_db::repository::create_batch::CreateBatch;
    use agency_core_db::repository::find_by_id::FindById;
    use agency_core_db::repository::update_batch::UpdateBatch;
    use serial_test::serial;
    use agency_core_db::test_utils::create_test_agent;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_update_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agent_repo = &ctx.agent_repos().agent_repository;

        let mut agent = create_test_agent("AG401", None);
        agent_repo.create_batch(vec![agent.clone()]).await?;

        agent.status = AgentStatus::Suspended;
        agent.policies_sold = 3;
        agent_repo.update_batch(vec![agent.clone()]).await?;

        let loaded = agent_repo.find_by_id(agent.id).await?.unwrap();
        assert_eq!(loaded.status, AgentStatus::Suspended);
        assert_eq!(loaded.policies_sold, 3);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_update_missing_agent_fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agent_repo = &ctx.agent_repos().agent_repository;

        let result = agent_repo.update_batch(vec![create_test_agent("AG402", None)]).await;
        assert!(result.is_err());

        Ok(())
    }
}

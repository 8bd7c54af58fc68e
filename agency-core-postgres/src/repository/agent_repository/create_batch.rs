use async_trait::async_trait;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::create_batch::CreateBatch;
use std::error::Error;

use super::repo_impl::AgentRepositoryImpl;

impl AgentRepositoryImpl {
    pub(super) async fn create_batch_impl(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // Acquire lock once and do all database operations
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO agent (
                    id, code, display_name, email, phone, parent_id, level,
                    commission_rate, wallet_balance, lifetime_earnings,
                    customer_count, policies_sold, status, joined_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
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
        }

        tracing::debug!(count = items.len(), "Inserted agents");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<AgentModel> for AgentRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<AgentModel>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        self.create_batch_impl(items).await
    }
}

use async_trait::async_trait;
use agency_core_db::models::agent::AgentModel;
use agency_core_db::repository::list_all::ListAll;
use agency_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Row;
use std::error::Error;

use super::repo_impl::AgentRepositoryImpl;

impl AgentRepositoryImpl {
    async fn count_agents(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let row = sqlx::query("SELECT COUNT(*) AS total FROM agent")
            .fetch_one(&mut **transaction)
            .await?;
        let total: i64 = row.try_get("total")?;
        Ok(usize::try_from(total)?)
    }
}

#[async_trait]
impl ListAll<AgentModel> for AgentRepositoryImpl {
    async fn list_all(&self, page: PageRequest) -> Result<Page<AgentModel>, Box<dyn Error + Send + Sync>> {
        let total = self.count_agents().await?;
        let query = sqlx::query("SELECT * FROM agent ORDER BY code LIMIT $1 OFFSET $2")
            .bind(i64::try_from(page.limit)?)
            .bind(i64::try_from(page.offset)?);
        let items = self.fetch_agents(query).await?;
        Ok(Page::new(items, total, page.limit, page.offset))
    }
}

use agency_core_db::models::agent::AgentModel;
use crate::unit_of_work::Executor;
use crate::utils::{get_agent_code, get_heapless_string, get_level, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct AgentRepositoryImpl {
    pub executor: Executor,
}

impl AgentRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Runs `SELECT * FROM agent WHERE ...` style queries inside the session transaction
    pub(crate) async fn fetch_agents(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<AgentModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut agents = Vec::with_capacity(rows.len());
        for row in rows {
            agents.push(AgentModel::try_from_row(&row)?);
        }
        Ok(agents)
    }
}

impl TryFromRow<PgRow> for AgentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AgentModel {
            id: row.try_get("id")?,
            code: get_agent_code(row, "code")?,
            display_name: get_heapless_string(row, "display_name")?,
            email: get_optional_heapless_string(row, "email")?,
            phone: get_optional_heapless_string(row, "phone")?,
            parent_id: row.try_get("parent_id")?,
            level: get_level(row, "level")?,
            commission_rate: row.try_get("commission_rate")?,
            wallet_balance: row.try_get("wallet_balance")?,
            lifetime_earnings: row.try_get("lifetime_earnings")?,
            customer_count: row.try_get("customer_count")?,
            policies_sold: row.try_get("policies_sold")?,
            status: row.try_get("status")?,
            joined_at: row.try_get("joined_at")?,
        })
    }
}

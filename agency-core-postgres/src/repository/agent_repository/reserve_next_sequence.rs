use async_trait::async_trait;
use agency_core_api::AgentCode;
use agency_core_db::repository::reserve_next_sequence::ReserveNextSequence;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::AgentRepositoryImpl;

/// Counter key of root agents
const ROOT_SEQUENCE_KEY: &str = "";

impl AgentRepositoryImpl {
    pub(super) async fn reserve_next_sequence_impl(
        &self,
        parent_code: Option<&AgentCode>,
    ) -> Result<u32, Box<dyn Error + Send + Sync>> {
        let key = parent_code.map(|code| code.as_str()).unwrap_or(ROOT_SEQUENCE_KEY);

        // Siblings inserted without going through the counter still push the
        // next value past their sequences
        let like_pattern = match parent_code {
            Some(code) => format!("{code}-%"),
            None => "AG%".to_string(),
        };

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        // Single statement upsert; the row lock serializes concurrent reservations
        let row = sqlx::query(
            r#"
            WITH siblings AS (
                SELECT COALESCE(MAX(
                    CAST(substring(code FROM '([0-9]+)$') AS INTEGER)
                ), 0) AS highest
                FROM agent
                WHERE code LIKE $2
                  AND array_length(string_to_array(code, '-'), 1) = $3
            )
            INSERT INTO agent_code_sequence (parent_code, last_sequence)
            SELECT $1, highest + 1 FROM siblings
            ON CONFLICT (parent_code) DO UPDATE
                SET last_sequence = GREATEST(
                    agent_code_sequence.last_sequence,
                    EXCLUDED.last_sequence - 1
                ) + 1
            RETURNING last_sequence
            "#,
        )
        .bind(key)
        .bind(like_pattern)
        .bind(i32::from(parent_code.map(|code| code.level()).unwrap_or(0)) + 1)
        .fetch_one(&mut **transaction)
        .await?;

        let sequence: i32 = row.try_get("last_sequence")?;
        tracing::debug!(parent = key, sequence, "Reserved agent code sequence");
        Ok(u32::try_from(sequence)?)
    }
}

#[async_trait]
impl ReserveNextSequence for AgentRepositoryImpl {
    async fn reserve_next_sequence(
        &self,
        parent_code: Option<&AgentCode>,
    ) -> Result<u32, Box<dyn Error + Send + Sync>> {
        self.reserve_next_sequence_impl(parent_code).await
    }
}

//! Transaction shared by the repositories of one session
//!
//! Every repository built for a session holds a clone of the same
//! `Executor`, so all of their statements run in one transaction. The
//! transaction is rolled back if the last clone is dropped before `commit`.

use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn commit(&self) -> Result<(), sqlx::Error> {
        match self.tx.lock().await.take() {
            Some(tx) => tx.commit().await,
            None => Err(consumed()),
        }
    }

    pub async fn rollback(&self) -> Result<(), sqlx::Error> {
        match self.tx.lock().await.take() {
            Some(tx) => tx.rollback().await,
            None => Err(consumed()),
        }
    }
}

fn consumed() -> sqlx::Error {
    sqlx::Error::Protocol("Transaction has been consumed".to_string())
}

//! Transaction sharing between the repositories of one unit of work.

use std::sync::Arc;

use order_core_api::{OrderError, OrderResult};
use sqlx::{Postgres, Transaction};
use tokio::sync::Mutex;

/// Handle to the transaction of a unit of work.
///
/// Clones share the same transaction. Once committed or rolled back the
/// transaction is consumed and further queries fail; dropping every handle
/// without committing rolls the work back.
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

    pub async fn commit(&self) -> OrderResult<()> {
        let tx = self.tx.lock().await.take().ok_or_else(transaction_consumed)?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> OrderResult<()> {
        let tx = self.tx.lock().await.take().ok_or_else(transaction_consumed)?;
        tx.rollback().await?;
        Ok(())
    }

    pub async fn is_active(&self) -> bool {
        self.tx.lock().await.is_some()
    }
}

pub fn transaction_consumed() -> OrderError {
    OrderError::Database("Transaction has been consumed".to_string())
}

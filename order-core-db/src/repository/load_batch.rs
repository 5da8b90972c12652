use async_trait::async_trait;
use order_core_api::OrderResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Batched lookup of reference rows by id, used when an order needs data
/// copied from several products at once.
///
/// The result is aligned with `ids`: position `n` holds `Some` when `ids[n]`
/// resolved and `None` otherwise. Repeated ids each receive their own entry.
#[async_trait]
pub trait LoadBatch<DB: Database, T: Identifiable>: Send + Sync {
    async fn load_batch(&self, ids: &[Uuid]) -> OrderResult<Vec<Option<T>>>;
}

use async_trait::async_trait;
use order_core_api::OrderResult;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for checking existence of multiple entities by their IDs
/// 
/// Implementations answer with a single batched query rather than one round
/// trip per id.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait ExistByIds<DB: Database>: Send + Sync {
    /// Check which of the given ids exist
    /// 
    /// # Returns
    /// * `Ok(Vec<(Uuid, bool)>)` - One tuple per requested id, in request order
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_ids(&self, ids: &[Uuid]) -> OrderResult<Vec<(Uuid, bool)>>;

    /// True iff every id exists. An empty slice is trivially true.
    async fn all_exist(&self, ids: &[Uuid]) -> OrderResult<bool> {
        if ids.is_empty() {
            return Ok(true);
        }
        let existence = self.exist_by_ids(ids).await?;
        Ok(existence.iter().all(|(_, exists)| *exists))
    }
}

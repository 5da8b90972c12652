use async_trait::async_trait;
use order_core_api::OrderResult;
use sqlx::Database;

/// Lookup of reference data by its exact (case-sensitive) name
#[async_trait]
pub trait FindByName<DB: Database, T>: Send + Sync {
    async fn find_by_name(&self, name: &str) -> OrderResult<Option<T>>;
}

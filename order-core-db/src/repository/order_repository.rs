use async_trait::async_trait;
use order_core_api::{OrderCreateRequest, OrderDetail, OrderResult, OrderSummary};
use sqlx::Database;
use uuid::Uuid;

/// Store owning orders and their items.
///
/// Every operation runs inside the unit of work the repository was built
/// with. Totals are always derived from current product pricing.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait OrderRepository<DB: Database>: Send + Sync {
    /// All orders, or only those whose status name equals `status_name`
    /// exactly, newest first with ties ordered by id.
    ///
    /// Fails with `MalformedPersistedState` when an item has no quantity.
    async fn list_orders(&self, status_name: Option<&str>) -> OrderResult<Vec<OrderSummary>>;

    /// Fails with `NotFound` when no order has this id.
    async fn get_order_detail(&self, order_id: Uuid) -> OrderResult<OrderDetail>;

    async fn order_exists(&self, order_id: Uuid) -> OrderResult<bool>;

    /// Overwrite the order's status. The status id is not re-validated.
    ///
    /// Fails with `NotFound` when no order has this id.
    async fn update_order_status(&self, order_id: Uuid, status_id: Uuid) -> OrderResult<()>;

    /// Insert the order and all of its items, copying each item's service id
    /// from its product, and read the result back.
    ///
    /// Fails with `ReferentialInconsistency` when a product no longer exists.
    async fn create_order(&self, request: &OrderCreateRequest) -> OrderResult<OrderDetail>;
}

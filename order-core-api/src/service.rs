use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{OrderCreateRequest, OrderDetail, OrderSummary, ProfitSummary};
use crate::error::OrderResult;

/// Narrow order contract consumed by the boundary layer.
///
/// Implementations forward to the order store and profit aggregator without
/// adding business rules of their own.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// List orders, newest first, optionally restricted to an exact status name.
    async fn get_orders(&self, status_name: Option<&str>) -> OrderResult<Vec<OrderSummary>>;

    /// Fails with `OrderError::NotFound` when no order has this id.
    async fn get_order_by_id(&self, order_id: Uuid) -> OrderResult<OrderDetail>;

    /// Does not re-validate `status_id`; callers check it with [`OrderStatusService`].
    async fn update_order_status(&self, order_id: Uuid, status_id: Uuid) -> OrderResult<()>;

    async fn order_exists(&self, order_id: Uuid) -> OrderResult<bool>;

    async fn create_order(&self, request: &OrderCreateRequest) -> OrderResult<OrderDetail>;

    async fn get_profit_summary(&self) -> OrderResult<Vec<ProfitSummary>>;
}

#[async_trait]
pub trait OrderStatusService: Send + Sync {
    async fn order_status_exists(&self, status_id: Uuid) -> OrderResult<bool>;
}

#[async_trait]
pub trait OrderProductService: Send + Sync {
    /// True iff every id resolves to a product. An empty slice is trivially true.
    async fn all_products_exist(&self, product_ids: &[Uuid]) -> OrderResult<bool>;
}

use std::sync::Arc;

use async_trait::async_trait;
use order_core_api::{OrderCreateRequest, OrderDetail, OrderResult, OrderSummary};
use order_core_db::repository::order_repository::OrderRepository;
use sqlx::Postgres;
use uuid::Uuid;

use crate::repository::reference::ProductRepositoryImpl;
use crate::unit_of_work::Executor;

pub struct OrderRepositoryImpl {
    pub executor: Executor,
    pub product_repository: Arc<ProductRepositoryImpl>,
}

impl OrderRepositoryImpl {
    pub fn new(executor: Executor, product_repository: Arc<ProductRepositoryImpl>) -> Self {
        Self {
            executor,
            product_repository,
        }
    }
}

#[async_trait]
impl OrderRepository<Postgres> for OrderRepositoryImpl {
    async fn list_orders(&self, status_name: Option<&str>) -> OrderResult<Vec<OrderSummary>> {
        Self::list_orders_impl(self, status_name).await
    }

    async fn get_order_detail(&self, order_id: Uuid) -> OrderResult<OrderDetail> {
        Self::get_order_detail_impl(self, order_id).await
    }

    async fn order_exists(&self, order_id: Uuid) -> OrderResult<bool> {
        Self::order_exists_impl(self, order_id).await
    }

    async fn update_order_status(&self, order_id: Uuid, status_id: Uuid) -> OrderResult<()> {
        Self::update_order_status_impl(self, order_id, status_id).await
    }

    async fn create_order(&self, request: &OrderCreateRequest) -> OrderResult<OrderDetail> {
        Self::create_order_impl(self, request).await
    }
}

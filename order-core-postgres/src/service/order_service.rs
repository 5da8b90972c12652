use std::sync::Arc;

use async_trait::async_trait;
use order_core_api::{
    OrderCreateRequest, OrderDetail, OrderResult, OrderService, OrderSummary, ProfitSummary,
};
use order_core_db::repository::order_repository::OrderRepository;
use order_core_db::repository::profit_summary::ProfitSummaryRepository;
use uuid::Uuid;

use crate::postgres_repositories::PostgresRepositories;

/// Postgres-backed [`OrderService`]. Each call is one unit of work that is
/// committed only when the delegated operation succeeds.
pub struct OrderServiceImpl {
    repositories: Arc<PostgresRepositories>,
}

impl OrderServiceImpl {
    pub fn new(repositories: Arc<PostgresRepositories>) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn get_orders(&self, status_name: Option<&str>) -> OrderResult<Vec<OrderSummary>> {
        let session = self.repositories.begin_session().await?;
        let orders = session.order_repos().order_repository.list_orders(status_name).await?;
        session.commit().await?;
        Ok(orders)
    }

    #[tracing::instrument(skip(self))]
    async fn get_order_by_id(&self, order_id: Uuid) -> OrderResult<OrderDetail> {
        let session = self.repositories.begin_session().await?;
        let order = session.order_repos().order_repository.get_order_detail(order_id).await?;
        session.commit().await?;
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn update_order_status(&self, order_id: Uuid, status_id: Uuid) -> OrderResult<()> {
        let session = self.repositories.begin_session().await?;
        session
            .order_repos()
            .order_repository
            .update_order_status(order_id, status_id)
            .await?;
        session.commit().await
    }

    #[tracing::instrument(skip(self))]
    async fn order_exists(&self, order_id: Uuid) -> OrderResult<bool> {
        let session = self.repositories.begin_session().await?;
        let exists = session.order_repos().order_repository.order_exists(order_id).await?;
        session.commit().await?;
        Ok(exists)
    }

    #[tracing::instrument(skip(self, request), fields(items = request.items.len()))]
    async fn create_order(&self, request: &OrderCreateRequest) -> OrderResult<OrderDetail> {
        let session = self.repositories.begin_session().await?;
        let order = session.order_repos().order_repository.create_order(request).await?;
        session.commit().await?;
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn get_profit_summary(&self) -> OrderResult<Vec<ProfitSummary>> {
        let session = self.repositories.begin_session().await?;
        let summary = session.order_repos().order_repository.monthly_profit_summary().await?;
        session.commit().await?;
        Ok(summary)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use order_core_api::{OrderProductService, OrderResult};
use order_core_db::repository::exist_by_ids::ExistByIds;
use uuid::Uuid;

use crate::postgres_repositories::PostgresRepositories;

pub struct OrderProductServiceImpl {
    repositories: Arc<PostgresRepositories>,
}

impl OrderProductServiceImpl {
    pub fn new(repositories: Arc<PostgresRepositories>) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl OrderProductService for OrderProductServiceImpl {
    #[tracing::instrument(skip(self, product_ids), fields(products = product_ids.len()))]
    async fn all_products_exist(&self, product_ids: &[Uuid]) -> OrderResult<bool> {
        if product_ids.is_empty() {
            return Ok(true);
        }

        let session = self.repositories.begin_session().await?;
        let exist = session
            .reference_repos()
            .product_repository
            .all_exist(product_ids)
            .await?;
        session.commit().await?;
        Ok(exist)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use order_core_api::{OrderResult, OrderStatusService};
use uuid::Uuid;

use crate::postgres_repositories::PostgresRepositories;

pub struct OrderStatusServiceImpl {
    repositories: Arc<PostgresRepositories>,
}

impl OrderStatusServiceImpl {
    pub fn new(repositories: Arc<PostgresRepositories>) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl OrderStatusService for OrderStatusServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn order_status_exists(&self, status_id: Uuid) -> OrderResult<bool> {
        let session = self.repositories.begin_session().await?;
        let exists = session
            .reference_repos()
            .order_status_repository
            .status_exists(status_id)
            .await?;
        session.commit().await?;
        Ok(exists)
    }
}

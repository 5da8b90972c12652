use sqlx::PgPool;
use std::sync::Arc;

use order_core_api::OrderResult;

use crate::repository::order::{OrderRepoFactory, OrderRepositories};
use crate::repository::reference::{ReferenceRepoFactory, ReferenceRepositories};
use crate::unit_of_work::Executor;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    order_factory: Arc<OrderRepoFactory>,
    reference_factory: Arc<ReferenceRepoFactory>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            order_factory: OrderRepoFactory::new(),
            reference_factory: ReferenceRepoFactory::new(),
        }
    }

    /// Begin a unit of work: all repositories of the session share one transaction
    pub async fn begin_session(&self) -> OrderResult<OrderSession> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        let reference_repos = self.reference_factory.build_all_repos(&executor);
        let order_repos = self
            .order_factory
            .build_all_repos(&executor, reference_repos.product_repository.clone());

        Ok(OrderSession {
            executor,
            order_repos,
            reference_repos,
        })
    }
}

/// One unit of work. Dropping the session without committing rolls it back.
pub struct OrderSession {
    executor: Executor,
    order_repos: OrderRepositories,
    reference_repos: ReferenceRepositories,
}

impl OrderSession {
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn order_repos(&self) -> &OrderRepositories {
        &self.order_repos
    }

    pub fn reference_repos(&self) -> &ReferenceRepositories {
        &self.reference_repos
    }

    pub async fn commit(self) -> OrderResult<()> {
        self.executor.commit().await
    }
}

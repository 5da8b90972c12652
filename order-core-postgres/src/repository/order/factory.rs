use std::sync::Arc;

use super::order_repository::OrderRepositoryImpl;
use crate::repository::reference::ProductRepositoryImpl;
use crate::unit_of_work::Executor;

/// Factory for creating order module repositories
///
/// Holds no state: every build reads through the executor it is given.
#[derive(Default)]
pub struct OrderRepoFactory {}

impl OrderRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an OrderRepository with the given executor
    pub fn build_order_repo(
        &self,
        executor: &Executor,
        product_repository: Arc<ProductRepositoryImpl>,
    ) -> Arc<OrderRepositoryImpl> {
        Arc::new(OrderRepositoryImpl::new(executor.clone(), product_repository))
    }

    /// Build all order repositories with the given executor
    pub fn build_all_repos(
        &self,
        executor: &Executor,
        product_repository: Arc<ProductRepositoryImpl>,
    ) -> OrderRepositories {
        OrderRepositories {
            order_repository: self.build_order_repo(executor, product_repository),
        }
    }
}

/// Container for all order module repositories
pub struct OrderRepositories {
    pub order_repository: Arc<OrderRepositoryImpl>,
}

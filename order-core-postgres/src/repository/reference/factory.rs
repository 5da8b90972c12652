use std::sync::Arc;

use super::{
    order_status_repository::OrderStatusRepositoryImpl,
    product_repository::ProductRepositoryImpl,
};
use crate::unit_of_work::Executor;

/// Factory for the read-only reference data repositories
#[derive(Default)]
pub struct ReferenceRepoFactory {}

impl ReferenceRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an OrderStatusRepository with the given executor
    pub fn build_order_status_repo(&self, executor: &Executor) -> Arc<OrderStatusRepositoryImpl> {
        Arc::new(OrderStatusRepositoryImpl::new(executor.clone()))
    }

    /// Build a ProductRepository with the given executor
    pub fn build_product_repo(&self, executor: &Executor) -> Arc<ProductRepositoryImpl> {
        Arc::new(ProductRepositoryImpl::new(executor.clone()))
    }

    /// Build all reference repositories with the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> ReferenceRepositories {
        ReferenceRepositories {
            order_status_repository: self.build_order_status_repo(executor),
            product_repository: self.build_product_repo(executor),
        }
    }
}

/// Container for all reference data repositories
pub struct ReferenceRepositories {
    pub order_status_repository: Arc<OrderStatusRepositoryImpl>,
    pub product_repository: Arc<ProductRepositoryImpl>,
}

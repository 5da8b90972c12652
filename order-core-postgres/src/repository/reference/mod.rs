pub mod factory;
pub mod order_status_repository;
pub mod product_repository;

pub use factory::{ReferenceRepoFactory, ReferenceRepositories};
pub use order_status_repository::OrderStatusRepositoryImpl;
pub use product_repository::ProductRepositoryImpl;

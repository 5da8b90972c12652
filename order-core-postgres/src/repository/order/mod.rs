pub mod factory;
pub mod order_repository;

pub use factory::{OrderRepoFactory, OrderRepositories};
pub use order_repository::OrderRepositoryImpl;

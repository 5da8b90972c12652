pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod unit_of_work;
pub mod utils;

pub use config::DatabaseConfig;
pub use postgres_repositories::{OrderSession, PostgresRepositories};
pub use service::{OrderProductServiceImpl, OrderServiceImpl, OrderStatusServiceImpl};
pub use unit_of_work::Executor;

#[cfg(test)]
pub mod test_helper;

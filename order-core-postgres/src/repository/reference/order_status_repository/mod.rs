pub mod repo_impl;
pub mod exist_by_ids;
pub mod find_by_name;

pub use repo_impl::OrderStatusRepositoryImpl;

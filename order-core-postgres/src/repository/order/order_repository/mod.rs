pub mod repo_impl;
pub mod load_views;
pub mod list_orders;
pub mod get_order_detail;
pub mod order_exists;
pub mod update_order_status;
pub mod create_order;
pub mod completed_order_profits;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::OrderRepositoryImpl;

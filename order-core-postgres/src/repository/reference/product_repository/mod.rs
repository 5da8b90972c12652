pub mod repo_impl;
pub mod exist_by_ids;
pub mod load_batch;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ProductRepositoryImpl;

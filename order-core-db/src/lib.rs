pub mod aggregation;
pub mod models;
pub mod repository;

pub use aggregation::*;
pub use models::*;

pub mod exist_by_ids;
pub mod find_by_name;
pub mod load_batch;
pub mod order_repository;
pub mod profit_summary;

// Re-exports
pub use exist_by_ids::*;
pub use find_by_name::*;
pub use load_batch::*;
pub use order_repository::*;
pub use profit_summary::*;

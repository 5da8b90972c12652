pub mod identifiable;
pub mod order;
pub mod order_status;
pub mod product;
pub mod views;

// Re-exports
pub use identifiable::*;
pub use order::*;
pub use order_status::*;
pub use product::*;
pub use views::*;

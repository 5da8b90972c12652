pub mod order_product_service;
pub mod order_service;
pub mod order_status_service;

pub use order_product_service::OrderProductServiceImpl;
pub use order_service::OrderServiceImpl;
pub use order_status_service::OrderStatusServiceImpl;

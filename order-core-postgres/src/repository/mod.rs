pub mod order;
pub mod reference;

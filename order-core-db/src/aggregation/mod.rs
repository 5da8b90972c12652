pub mod profit;
pub mod totals;

pub use profit::*;
pub use totals::*;

pub use add_stock::*;
pub use deposit_funds::*;
pub use remove_stock::*;

mod add_stock;
mod deposit_funds;
mod remove_stock;

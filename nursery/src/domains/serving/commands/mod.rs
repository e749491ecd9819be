pub use dismiss_customer::*;
pub use spawn_customer::*;

mod dismiss_customer;
mod spawn_customer;

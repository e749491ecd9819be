pub use get_customer::*;

mod get_customer;

pub use get_worker::*;

mod get_worker;

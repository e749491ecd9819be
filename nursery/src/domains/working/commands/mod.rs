pub use hire_worker::*;

mod hire_worker;

pub use get_greenhouse::*;
pub use get_plant::*;

mod get_greenhouse;
mod get_plant;

pub use attach_observer::*;
pub use create_greenhouse::*;
pub use create_plant::*;
pub use destroy_plant::*;
pub use fertilize_plant::*;
pub use harvest_plant::*;
pub use water_plant::*;

mod attach_observer;
mod create_greenhouse;
mod create_plant;
mod destroy_plant;
mod fertilize_plant;
mod harvest_plant;
mod water_plant;

pub mod planting;
pub mod serving;
pub mod trading;
pub mod working;

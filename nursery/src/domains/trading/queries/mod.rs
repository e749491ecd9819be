pub use price_of::*;

mod price_of;

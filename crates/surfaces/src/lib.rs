pub mod geopoints;
pub mod markers;

pub use geopoints::*;
pub use markers::*;

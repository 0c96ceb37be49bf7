pub mod csv_table;
pub mod sample;

pub use csv_table::*;
pub use sample::*;

// CSV loading and transformation
pub mod csv_file;
pub mod transform;

// Re-export commonly used items
pub use csv_file::{RawRow, load_raw_rows};
pub use transform::to_observations;

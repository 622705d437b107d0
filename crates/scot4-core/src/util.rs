//! Common utility functions.

pub mod data;
pub mod fs;

// Re-export commonly used items
pub use data::{load_yaml, load_yaml_file, save_yaml_file, to_block_yaml};
pub use fs::{slurp, write_file};

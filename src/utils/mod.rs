pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{data_output_path, inventory_output_path};
pub use progress::ProgressReporter;

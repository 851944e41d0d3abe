//! Row datasets: file loading, the bundled sample, and synthetic generation.

pub mod loader;
pub mod sample;

pub use loader::{load_rows, read_csv, read_json, DatasetError, DatasetFormat};
pub use sample::{sample_rows, synthetic_rows};

//! I/O layer: reading measurement CSVs produced by the matmul benchmark harness.
pub mod dataset;
pub use dataset::{Dataset, MeasurementRow, load_dataset, read_dataset};

pub mod writers;
pub use writers::chart::write_comparison_chart;

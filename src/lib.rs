#![doc = r#"
matcost — overlay measured matmul kernel costs on their analytical models.

A benchmark harness sweeps matrix density and records, per sample, how many
floating-point operations (`flops`) and memory operations (`memops`) a
dense×dense, csr×dense, csc×dense, csr×csr or csc×csc multiplication kernel
performed. This crate loads those CSVs, picks the closed-form cost model for
each file from its name, evaluates the model over the density sweep and draws
observed against predicted values in a two-panel (flops, memops) figure.

Input files
-----------
CSV with headers; at least `row_count`, `col_count`, `density`, `flops`,
`memops`. The harness also writes `inner_count`, `left_non_zero_count`,
`right_non_zero_count` and `time`, which are used when configured.

The file name (full path as given) must contain one of `dense_X_dense`,
`csr_X_dense`, `csc_X_dense`, `csr_X_csr` or `csc_X_csc`.

Quick start: files to a PNG
---------------------------
```rust,no_run
use matcost::{PlotParams, compare_files_to_path};

fn main() -> matcost::Result<()> {
    let params = PlotParams {
        show: false,
        ..PlotParams::default()
    };
    let report = compare_files_to_path(
        &["runs/csr_X_dense.csv", "runs/csc_X_dense.csv"],
        &params,
    )?;
    println!("wrote {}", report.output.display());
    Ok(())
}
```

Evaluating a model directly
---------------------------
```rust
use ndarray::array;
use matcost::{LayoutPair, Operands};

let density = array![0.1, 0.2];
let nnz = &density * (100.0 * 100.0);
let ops = Operands {
    left_rows: 100.0,
    left_cols: 100.0,
    right_cols: 100.0,
    left_nnz: nnz.clone(),
    right_nnz: nnz,
};
let (flops, _memops) = LayoutPair::CsrDense.predict(&ops);
let flops = flops.broadcast(density.len());
assert!((flops[0] - 200_000.0).abs() < 1e-6);
```

Error handling
--------------
All public functions return `matcost::Result<T>`. A file name without a known
layout label yields `Error::NoFormula`, whose message is
`No formula defined for file <file>`.

Feature flags
-------------
- `gui` (default): interactive viewer window for the saved figure.
- `full`: everything.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — cost formulas, layout selection, comparison series, parameters.
- [`io`] — CSV loading and chart writing.
- [`types`] — shared enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::formulas::{Cost, Formula, Operands};
pub use crate::core::model::Comparison;
pub use crate::core::params::PlotParams;
pub use error::{Error, Result};
pub use types::{Geometry, LayoutPair, Metric, NnzSource};

// Readers and writers
pub use io::dataset::{Dataset, MeasurementRow, load_dataset, read_dataset};
pub use io::writers::chart::write_comparison_chart;

// Selection
pub use crate::core::selector::{resolve_layout, select_layout};

// High-level API re-exports
pub use api::{
    FileSummary, RunReport, compare_files_to_path, plan_comparison, plan_comparisons,
    render_comparisons,
};

//! High-level, ergonomic library API: plan comparisons from measurement files,
//! render them, or do both in one call. Prefer these entrypoints over the
//! low-level `core` and `io` modules when embedding matcost.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::model::{Comparison, compare};
use crate::core::params::PlotParams;
use crate::core::selector::resolve_layout;
use crate::error::{Error, Result};
use crate::io::dataset::load_dataset;
use crate::io::writers::chart::write_comparison_chart;
use crate::types::LayoutPair;

/// Per-file outcome of a run
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub layout: LayoutPair,
    pub samples: usize,
}

/// Result of `compare_files_to_path`
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub output: PathBuf,
    pub files: Vec<FileSummary>,
}

/// Build the comparison for a single measurement file.
pub fn plan_comparison(path: &Path, params: &PlotParams) -> Result<Comparison> {
    let layout = resolve_layout(path)?;
    let dataset = load_dataset(path)?;
    compare(&dataset, layout, params)
}

/// Build comparisons for every file, in order. Stops at the first failure,
/// so nothing is drawn for a run that names an unknown layout.
pub fn plan_comparisons<P: AsRef<Path>>(
    files: &[P],
    params: &PlotParams,
) -> Result<Vec<Comparison>> {
    files
        .iter()
        .map(|path| plan_comparison(path.as_ref(), params))
        .collect()
}

/// Render planned comparisons to `params.output`, replacing any existing file.
pub fn render_comparisons(comparisons: &[Comparison], params: &PlotParams) -> Result<()> {
    params.validate()?;
    write_comparison_chart(comparisons, &params.output, params.width, params.height)
}

/// Plan and render in one go.
pub fn compare_files_to_path<P: AsRef<Path>>(
    files: &[P],
    params: &PlotParams,
) -> Result<RunReport> {
    if files.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "files",
            value: "<none>".to_string(),
        });
    }
    params.validate()?;

    let comparisons = plan_comparisons(files, params)?;
    render_comparisons(&comparisons, params)?;

    let files = files
        .iter()
        .zip(&comparisons)
        .map(|(path, cmp)| FileSummary {
            path: path.as_ref().to_path_buf(),
            layout: cmp.layout,
            samples: cmp.len(),
        })
        .collect();

    info!("Saved figure: {:?}", params.output);
    Ok(RunReport {
        output: params.output.clone(),
        files,
    })
}

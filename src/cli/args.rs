use clap::Parser;
use std::path::PathBuf;

use matcost::{Geometry, NnzSource};

#[derive(Parser, Debug)]
#[command(
    name = "matcost",
    version,
    about = "Plot observed matmul flops/memops against analytical cost models"
)]
pub struct CliArgs {
    /// Measurement CSVs; the file name selects the cost model
    /// (dense_X_dense, csr_X_dense, csc_X_dense, csr_X_csr, csc_X_csc)
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output image path (overwritten). Default: plot.png
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels. Default: 1200
    #[arg(long)]
    pub width: Option<u32>,

    /// Figure height in pixels. Default: 500
    #[arg(long)]
    pub height: Option<u32>,

    /// Where non-zero counts come from (derived from density, or recorded columns)
    #[arg(long, value_enum)]
    pub nnz_source: Option<NnzSource>,

    /// Operand shapes: square (row_count x col_count) or rectangular (uses inner_count)
    #[arg(long, value_enum)]
    pub geometry: Option<Geometry>,

    /// Save the figure without opening the viewer
    #[arg(long, default_value_t = false)]
    pub no_show: bool,

    /// JSON file with plot parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

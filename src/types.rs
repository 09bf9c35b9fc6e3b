//! Shared types and enums used across matcost.
//! Includes `LayoutPair` (which kernel a measurement file belongs to), `Metric`,
//! and the operand-shaping knobs `NnzSource` and `Geometry`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Storage layouts of the (left, right) operands of a measured matmul kernel.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum LayoutPair {
    DenseDense,
    CsrDense,
    CscDense,
    CsrCsr,
    CscCsc,
}

impl LayoutPair {
    /// Lookup order used when matching file names. First match wins.
    pub const ALL: [LayoutPair; 5] = [
        LayoutPair::DenseDense,
        LayoutPair::CsrDense,
        LayoutPair::CscDense,
        LayoutPair::CsrCsr,
        LayoutPair::CscCsc,
    ];

    /// File-name label written by the benchmark harness for this kernel.
    pub fn label(self) -> &'static str {
        match self {
            LayoutPair::DenseDense => "dense_X_dense",
            LayoutPair::CsrDense => "csr_X_dense",
            LayoutPair::CscDense => "csc_X_dense",
            LayoutPair::CsrCsr => "csr_X_csr",
            LayoutPair::CscCsc => "csc_X_csc",
        }
    }
}

impl std::fmt::Display for LayoutPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LayoutPair::DenseDense => "dense×dense",
            LayoutPair::CsrDense => "csr×dense",
            LayoutPair::CscDense => "csc×dense",
            LayoutPair::CsrCsr => "csr×csr",
            LayoutPair::CscCsc => "csc×csc",
        };
        write!(f, "{}", s)
    }
}

/// The two cost proxies that get a chart each.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Metric {
    Flops,
    Memops,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Flops, Metric::Memops];
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Flops => write!(f, "Flops"),
            Metric::Memops => write!(f, "Memops"),
        }
    }
}

/// Where operand non-zero counts come from.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NnzSource {
    /// rows × cols × density
    #[default]
    Derived,
    /// `left_non_zero_count` / `right_non_zero_count` columns
    Recorded,
}

impl std::fmt::Display for NnzSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NnzSource::Derived => write!(f, "derived"),
            NnzSource::Recorded => write!(f, "recorded"),
        }
    }
}

/// Operand shapes assumed when evaluating formulas.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Both operands are row_count × col_count.
    #[default]
    Square,
    /// Left is row_count × inner_count, right is inner_count × col_count.
    Rectangular,
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Square => write!(f, "square"),
            Geometry::Rectangular => write!(f, "rectangular"),
        }
    }
}

//! Turns a loaded `Dataset` into cost-model operands and a `Comparison`
//! of observed against predicted series.
use ndarray::Array1;
use tracing::debug;

use crate::core::formulas::Operands;
use crate::core::params::PlotParams;
use crate::error::{Error, Result};
use crate::io::dataset::Dataset;
use crate::types::{Geometry, LayoutPair, Metric, NnzSource};

/// Observed and predicted series for one measurement file, ready to plot.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub label: String,
    pub layout: LayoutPair,
    pub density: Array1<f64>,
    pub observed_flops: Array1<f64>,
    pub observed_memops: Array1<f64>,
    pub predicted_flops: Array1<f64>,
    pub predicted_memops: Array1<f64>,
}

impl Comparison {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    pub fn observed(&self, metric: Metric) -> &Array1<f64> {
        match metric {
            Metric::Flops => &self.observed_flops,
            Metric::Memops => &self.observed_memops,
        }
    }

    pub fn predicted(&self, metric: Metric) -> &Array1<f64> {
        match metric {
            Metric::Flops => &self.predicted_flops,
            Metric::Memops => &self.predicted_memops,
        }
    }
}

/// Operand shapes and non-zero counts for `dataset` under the given settings.
pub fn build_operands(dataset: &Dataset, geometry: Geometry, nnz: NnzSource) -> Result<Operands> {
    let rows = dataset.row_count as f64;
    let cols = dataset.col_count as f64;

    // (left rows, left cols) and (right rows, right cols)
    let ((lrc, lcc), (rrc, rcc)) = match geometry {
        Geometry::Square => ((rows, cols), (rows, cols)),
        Geometry::Rectangular => {
            let inner = dataset.inner_count.ok_or(Error::MissingColumn {
                file: dataset.path.clone(),
                column: "inner_count",
            })? as f64;
            ((rows, inner), (inner, cols))
        }
    };

    let (left_nnz, right_nnz) = match nnz {
        NnzSource::Derived => (
            &dataset.density * (lrc * lcc),
            &dataset.density * (rrc * rcc),
        ),
        NnzSource::Recorded => {
            let left = dataset.left_nnz.clone().ok_or(Error::MissingColumn {
                file: dataset.path.clone(),
                column: "left_non_zero_count",
            })?;
            let right = dataset.right_nnz.clone().ok_or(Error::MissingColumn {
                file: dataset.path.clone(),
                column: "right_non_zero_count",
            })?;
            (left, right)
        }
    };

    Ok(Operands {
        left_rows: lrc,
        left_cols: lcc,
        right_cols: rcc,
        left_nnz,
        right_nnz,
    })
}

/// Evaluate `layout`'s cost model over `dataset` and pair it with the observations.
pub fn compare(dataset: &Dataset, layout: LayoutPair, params: &PlotParams) -> Result<Comparison> {
    let operands = build_operands(dataset, params.geometry, params.nnz_source)?;
    let (flops, memops) = layout.predict(&operands);

    let len = dataset.len();
    debug!(
        "{}: {} over {} samples (scalar flops: {})",
        dataset.label(),
        layout,
        len,
        flops.is_scalar()
    );

    Ok(Comparison {
        label: dataset.label(),
        layout,
        density: dataset.density.clone(),
        observed_flops: dataset.flops.clone(),
        observed_memops: dataset.memops.clone(),
        predicted_flops: flops.broadcast(len),
        predicted_memops: memops.broadcast(len),
    })
}

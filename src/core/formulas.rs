//! Closed-form cost models for the measured matmul kernels.
//!
//! Every model maps the operand shapes and non-zero counts to a predicted
//! `(flops, memops)` pair. Models whose result does not depend on density
//! (dense×dense) produce a [`Cost::Scalar`]; the rest produce one value per
//! density sample.
use ndarray::Array1;

use crate::types::LayoutPair;

/// Inputs shared by all cost models.
///
/// Dimensions are scalars for the whole file; non-zero counts are per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Operands {
    pub left_rows: f64,
    pub left_cols: f64,
    pub right_cols: f64,
    pub left_nnz: Array1<f64>,
    pub right_nnz: Array1<f64>,
}

/// A predicted cost, either constant across the density sweep or per sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Cost {
    Scalar(f64),
    Series(Array1<f64>),
}

impl Cost {
    /// Expand to a series of `len` samples. Series are returned as-is.
    pub fn broadcast(self, len: usize) -> Array1<f64> {
        match self {
            Cost::Scalar(v) => Array1::from_elem(len, v),
            Cost::Series(s) => s,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Cost::Scalar(_))
    }
}

pub type Formula = fn(&Operands) -> (Cost, Cost);

pub fn dense_dense(ops: &Operands) -> (Cost, Cost) {
    let fmadds = ops.left_rows * ops.left_cols * ops.right_cols;
    let flops = 2.0 * fmadds;
    let memops = 2.0 * fmadds + ops.left_rows * ops.right_cols;
    (Cost::Scalar(flops), Cost::Scalar(memops))
}

pub fn csr_dense(ops: &Operands) -> (Cost, Cost) {
    let flops = &ops.left_nnz * (2.0 * ops.right_cols);
    let memops = &ops.left_nnz * (2.0 + 3.0 * ops.right_cols) + 2.0 * ops.left_rows;
    (Cost::Series(flops), Cost::Series(memops))
}

pub fn csc_dense(ops: &Operands) -> (Cost, Cost) {
    let flops = &ops.left_nnz * (2.0 * ops.right_cols);
    // pointer loads walk the left operand's columns instead of its rows
    let memops = &ops.left_nnz * (2.0 + 3.0 * ops.right_cols) + 2.0 * ops.left_cols;
    (Cost::Series(flops), Cost::Series(memops))
}

pub fn csr_csr(ops: &Operands) -> (Cost, Cost) {
    // right_nnz / right_cols approximates the mean non-zeros per right row
    let pairs = &ops.left_nnz * &ops.right_nnz / ops.right_cols;
    let flops = &pairs * 2.0;
    let memops = &pairs * 4.0 + &ops.left_nnz * 4.0 + 2.0 * ops.left_rows;
    (Cost::Series(flops), Cost::Series(memops))
}

pub fn csc_csc(ops: &Operands) -> (Cost, Cost) {
    let pairs = &ops.left_nnz * &ops.right_nnz / ops.right_cols;
    let flops = &pairs * 2.0;
    let memops = &pairs * 4.0 + &ops.right_nnz * 4.0 + 2.0 * ops.right_cols;
    (Cost::Series(flops), Cost::Series(memops))
}

impl LayoutPair {
    pub fn formula(self) -> Formula {
        match self {
            LayoutPair::DenseDense => dense_dense,
            LayoutPair::CsrDense => csr_dense,
            LayoutPair::CscDense => csc_dense,
            LayoutPair::CsrCsr => csr_csr,
            LayoutPair::CscCsc => csc_csc,
        }
    }

    /// Evaluate this layout's cost model.
    pub fn predict(self, ops: &Operands) -> (Cost, Cost) {
        (self.formula())(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn square(n: f64, density: Array1<f64>) -> Operands {
        let nnz = density * (n * n);
        Operands {
            left_rows: n,
            left_cols: n,
            right_cols: n,
            left_nnz: nnz.clone(),
            right_nnz: nnz,
        }
    }

    fn series(cost: Cost) -> Array1<f64> {
        match cost {
            Cost::Series(s) => s,
            Cost::Scalar(v) => panic!("expected series, got scalar {v}"),
        }
    }

    #[test]
    fn test_dense_dense_is_scalar_and_broadcasts() {
        let ops = square(100.0, array![0.1, 0.2, 0.5]);
        let (flops, memops) = dense_dense(&ops);
        assert!(flops.is_scalar());
        assert_eq!(flops.clone(), Cost::Scalar(2_000_000.0));
        assert_eq!(memops.clone(), Cost::Scalar(2_000_000.0 + 10_000.0));

        let flops = flops.broadcast(3);
        assert_eq!(flops.len(), 3);
        assert!(flops.iter().all(|&v| v == 2_000_000.0));
    }

    #[test]
    fn test_csr_dense_known_values() {
        let ops = square(100.0, array![0.1]);
        assert_eq!(ops.left_nnz[0], 1000.0);

        let (flops, memops) = csr_dense(&ops);
        assert_eq!(series(flops)[0], 200_000.0);
        // 2*100 + 2*1000 + 3*1000*100
        assert_eq!(series(memops)[0], 302_200.0);
    }

    #[test]
    fn test_csr_and_csc_dense_match_on_square() {
        let ops = square(64.0, array![0.01, 0.05, 0.3, 1.0]);
        assert_eq!(csr_dense(&ops), csc_dense(&ops));
    }

    #[test]
    fn test_csr_and_csc_dense_differ_by_fixed_term() {
        let ops = Operands {
            left_rows: 10.0,
            left_cols: 30.0,
            right_cols: 30.0,
            left_nnz: array![30.0, 60.0],
            right_nnz: array![90.0, 180.0],
        };
        let (csr_flops, csr_mem) = csr_dense(&ops);
        let (csc_flops, csc_mem) = csc_dense(&ops);
        assert_eq!(csr_flops, csc_flops);

        let diff = series(csc_mem) - series(csr_mem);
        // 2*left_cols - 2*left_rows
        assert!(diff.iter().all(|&d| (d - 40.0).abs() < 1e-9));
    }

    #[test]
    fn test_csr_csr_uses_mean_row_nnz() {
        let ops = square(100.0, array![0.1]);
        let (flops, memops) = csr_csr(&ops);
        // 1000 * 1000 / 100 = 10_000 multiply pairs
        assert_eq!(series(flops)[0], 20_000.0);
        assert_eq!(series(memops)[0], 200.0 + 4_000.0 + 40_000.0);
    }

    #[test]
    fn test_csc_csc_mirrors_csr_csr_on_square() {
        let ops = square(50.0, array![0.02, 0.2, 0.7]);
        assert_eq!(csr_csr(&ops), csc_csc(&ops));
    }

    #[test]
    fn test_formulas_are_deterministic() {
        let ops = square(37.0, array![0.013, 0.41, 0.9]);
        for layout in LayoutPair::ALL {
            assert_eq!(layout.predict(&ops), layout.predict(&ops), "{layout}");
        }
    }

    #[test]
    fn test_series_broadcast_is_identity() {
        let s = array![1.0, 2.0, 3.0];
        assert_eq!(Cost::Series(s.clone()).broadcast(3), s);
    }
}

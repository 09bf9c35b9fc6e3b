use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::LayoutPair;

/// First layout, in `LayoutPair::ALL` order, whose label occurs in `name`.
pub fn select_layout(name: &str) -> Option<LayoutPair> {
    LayoutPair::ALL
        .into_iter()
        .find(|layout| name.contains(layout.label()))
}

/// Every layout whose label occurs in `name`, in lookup order.
pub fn matching_layouts(name: &str) -> Vec<LayoutPair> {
    LayoutPair::ALL
        .into_iter()
        .filter(|layout| name.contains(layout.label()))
        .collect()
}

/// Resolve the cost model for a measurement file.
///
/// The whole path string is searched, as given by the caller.
pub fn resolve_layout(path: &Path) -> Result<LayoutPair> {
    let name = path.to_string_lossy();
    let matches = matching_layouts(&name);
    match matches.as_slice() {
        [] => Err(Error::NoFormula {
            file: name.into_owned(),
        }),
        [only] => {
            debug!("{} -> {}", name, only);
            Ok(*only)
        }
        [first, rest @ ..] => {
            warn!(
                "{} matches several layouts ({}, {:?}); using {}",
                name, first, rest, first
            );
            Ok(*first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_each_label() {
        for layout in LayoutPair::ALL {
            let name = format!("2024-1-2_3:4:5/{}.csv", layout.label());
            assert_eq!(select_layout(&name), Some(layout));
        }
    }

    #[test]
    fn test_unknown_name_is_no_formula() {
        let err = resolve_layout(Path::new("run_unknown_X_unknown.csv")).unwrap_err();
        assert!(matches!(err, Error::NoFormula { .. }));
        assert_eq!(
            err.to_string(),
            "No formula defined for file run_unknown_X_unknown.csv"
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(select_layout("CSR_X_DENSE.csv"), None);
    }

    #[test]
    fn test_ambiguous_name_takes_table_order() {
        let name = "csr_X_csr_vs_csr_X_dense.csv";
        assert_eq!(
            matching_layouts(name),
            vec![LayoutPair::CsrDense, LayoutPair::CsrCsr]
        );
        assert_eq!(
            resolve_layout(Path::new(name)).unwrap(),
            LayoutPair::CsrDense
        );
    }

    #[test]
    fn test_directory_part_counts() {
        assert_eq!(
            select_layout("results/dense_X_dense/run1.csv"),
            Some(LayoutPair::DenseDense)
        );
    }
}

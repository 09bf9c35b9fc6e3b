//! CSV loading for density-sweep measurement files.
//!
//! The benchmark harness writes one row per density sample:
//! `row_count,col_count,inner_count,left_non_zero_count,right_non_zero_count,density,flops,memops,time`.
//! Only `row_count`, `col_count`, `density`, `flops` and `memops` are required.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// One measurement sample as written by the harness.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementRow {
    pub row_count: u64,
    pub col_count: u64,
    #[serde(default)]
    pub inner_count: Option<u64>,
    #[serde(default)]
    pub left_non_zero_count: Option<f64>,
    #[serde(default)]
    pub right_non_zero_count: Option<f64>,
    pub density: f64,
    pub flops: f64,
    pub memops: f64,
    #[serde(default)]
    pub time: Option<f64>,
}

/// A whole file, column-oriented.
///
/// Dimensions come from the first row and are assumed constant.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub row_count: u64,
    pub col_count: u64,
    pub inner_count: Option<u64>,
    pub density: Array1<f64>,
    pub flops: Array1<f64>,
    pub memops: Array1<f64>,
    /// Present only when every row carries the column.
    pub left_nnz: Option<Array1<f64>>,
    pub right_nnz: Option<Array1<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Label used in legends: the path as given.
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }

    pub fn is_sorted_by_density(&self) -> bool {
        self.density
            .iter()
            .zip(self.density.iter().skip(1))
            .all(|(a, b)| a <= b)
    }

    fn from_rows(path: PathBuf, rows: Vec<MeasurementRow>) -> Result<Self> {
        let first = rows.first().ok_or_else(|| Error::EmptyDataset {
            file: path.clone(),
        })?;

        let column = |f: fn(&MeasurementRow) -> f64| rows.iter().map(f).collect::<Array1<f64>>();
        let optional = |f: fn(&MeasurementRow) -> Option<f64>| {
            rows.iter().map(f).collect::<Option<Vec<f64>>>().map(Array1::from)
        };

        let dataset = Dataset {
            row_count: first.row_count,
            col_count: first.col_count,
            inner_count: first.inner_count,
            density: column(|r| r.density),
            flops: column(|r| r.flops),
            memops: column(|r| r.memops),
            left_nnz: optional(|r| r.left_non_zero_count),
            right_nnz: optional(|r| r.right_non_zero_count),
            path,
        };

        if !dataset.is_sorted_by_density() {
            warn!(
                "{}: samples are not ordered by density; lines will follow file order",
                dataset.label()
            );
        }

        Ok(dataset)
    }
}

/// Parse measurement rows from any reader. `path` is used for labels and errors.
pub fn read_dataset<R: Read>(reader: R, path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: MeasurementRow = result.map_err(|e| Error::csv(path, e))?;
        rows.push(row);
    }
    debug!("{}: parsed {} rows", path.display(), rows.len());
    Dataset::from_rows(path.to_path_buf(), rows)
}

/// Load a measurement CSV from disk.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    info!("Loading measurements: {:?}", path);
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    read_dataset(file, path)
}

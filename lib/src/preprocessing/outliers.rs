//! Interquartile-range outlier removal.
//!
//! For each numeric column in turn, rows outside
//! `[Q1 - k * IQR, Q3 + k * IQR]` are dropped, with the quartiles computed over
//! the rows that survived the previous columns. A row can therefore be dropped
//! by any column's bounds. Quartiles use linear interpolation between order
//! statistics.

use crate::preprocessing::error::PreprocessingError;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default IQR multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Outcome of one filtering pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Rows before filtering.
    pub initial: usize,
    /// Rows dropped across all columns.
    pub removed: usize,
    /// Rows dropped by each column, in column order.
    pub removed_per_column: Vec<usize>,
}

impl OutlierReport {
    /// Fraction of rows removed; `0.0` for an empty batch.
    pub fn fraction_removed(&self) -> f64 {
        if self.initial == 0 {
            0.0
        } else {
            self.removed as f64 / self.initial as f64
        }
    }

    pub fn kept(&self) -> usize {
        self.initial - self.removed
    }
}

/// Quantile `q` (in `[0, 1]`) of a non-empty slice, linearly interpolated.
pub(crate) fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = (q * (sorted.len() - 1) as f64).clamp(0.0, (sorted.len() - 1) as f64);
    interpolate(&sorted, idx)
}

/// Linear interpolation at a fractional index.
fn interpolate(sorted: &[f64], idx: f64) -> f64 {
    let lower = idx.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let frac = idx - lower as f64;

    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}

/// IQR-based outlier filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IqrOutlierFilter {
    multiplier: f64,
}

impl Default for IqrOutlierFilter {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }
}

impl IqrOutlierFilter {
    /// Create a filter with a custom IQR multiplier.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidParameter`] if `multiplier` is negative or not finite.
    pub fn new(multiplier: f64) -> Result<Self, PreprocessingError> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(PreprocessingError::InvalidParameter(format!(
                "IQR multiplier must be a non-negative number, got {}",
                multiplier
            )));
        }
        Ok(Self { multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Decide which rows of `numeric` to keep.
    pub fn keep_mask(&self, numeric: ArrayView2<f64>) -> (Vec<bool>, OutlierReport) {
        let initial = numeric.nrows();
        let mut keep = vec![true; initial];
        let mut removed_per_column = Vec::with_capacity(numeric.ncols());

        for column in numeric.columns() {
            let current: Vec<f64> = column
                .iter()
                .zip(&keep)
                .filter(|&(_, &k)| k)
                .map(|(&v, _)| v)
                .collect();

            if current.is_empty() {
                removed_per_column.push(0);
                continue;
            }

            let q1 = quantile(&current, 0.25);
            let q3 = quantile(&current, 0.75);
            let iqr = q3 - q1;
            let lower = q1 - self.multiplier * iqr;
            let upper = q3 + self.multiplier * iqr;

            let mut removed = 0;
            for (k, &v) in keep.iter_mut().zip(column.iter()) {
                // NaN fails both comparisons and is dropped.
                if *k && !(v >= lower && v <= upper) {
                    *k = false;
                    removed += 1;
                }
            }
            removed_per_column.push(removed);
        }

        let report = OutlierReport {
            initial,
            removed: removed_per_column.iter().sum(),
            removed_per_column,
        };
        (keep, report)
    }

    /// Drop the rows of `rows` whose numeric values are outliers.
    ///
    /// `numeric` must have one row per element of `rows`.
    pub fn filter<T>(
        &self,
        rows: Vec<T>,
        numeric: ArrayView2<f64>,
    ) -> Result<(Vec<T>, OutlierReport), PreprocessingError> {
        if rows.len() != numeric.nrows() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "outlier filter got {} rows but {} numeric rows",
                rows.len(),
                numeric.nrows()
            )));
        }

        let (keep, report) = self.keep_mask(numeric);
        let kept = rows
            .into_iter()
            .zip(keep)
            .filter_map(|(row, k)| k.then_some(row))
            .collect();

        info!(
            initial = report.initial,
            removed = report.removed,
            fraction = report.fraction_removed(),
            "Removed outliers"
        );
        Ok((kept, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&values, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&values, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile(&[5.0], 0.25), 5.0);
    }

    #[test]
    fn test_extreme_row_is_dropped() {
        let numeric = array![
            [7.0, 1.0],
            [7.5, 2.0],
            [8.0, 2.0],
            [8.5, 3.0],
            [8.0, 40.0],
        ];
        let rows = vec!["a", "b", "c", "d", "e"];
        let (kept, report) = IqrOutlierFilter::default()
            .filter(rows, numeric.view())
            .unwrap();

        assert_eq!(kept, vec!["a", "b", "c", "d"]);
        assert_eq!(report.initial, 5);
        assert_eq!(report.removed, 1);
        assert_eq!(report.removed_per_column, vec![0, 1]);
        assert!((report.fraction_removed() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_columns_are_filtered_sequentially() {
        // Column 0 drops the last row; column 1's quartiles are then computed
        // without it.
        let numeric = array![
            [1.0, 10.0],
            [1.0, 10.0],
            [1.0, 10.0],
            [1.0, 11.0],
            [100.0, 10.0],
        ];
        let (keep, report) = IqrOutlierFilter::default().keep_mask(numeric.view());
        assert_eq!(keep, vec![true, true, true, false, false]);
        assert_eq!(report.removed_per_column, vec![1, 1]);
        assert_eq!(report.kept(), 3);
    }

    #[test]
    fn test_constant_columns_keep_everything() {
        let numeric = array![[8.0, 2.0], [8.0, 2.0], [8.0, 2.0]];
        let (keep, report) = IqrOutlierFilter::default().keep_mask(numeric.view());
        assert!(keep.iter().all(|&k| k));
        assert_eq!(report.removed, 0);
    }

    #[test]
    fn test_empty_batch() {
        let numeric = ndarray::Array2::<f64>::zeros((0, 2));
        let (kept, report) = IqrOutlierFilter::default()
            .filter(Vec::<u8>::new(), numeric.view())
            .unwrap();
        assert!(kept.is_empty());
        assert_eq!(report.fraction_removed(), 0.0);
    }

    #[test]
    fn test_row_count_mismatch_errors() {
        let numeric = array![[1.0], [2.0]];
        assert!(IqrOutlierFilter::default()
            .filter(vec![1], numeric.view())
            .is_err());
    }

    #[test]
    fn test_invalid_multiplier() {
        assert!(IqrOutlierFilter::new(-1.0).is_err());
        assert!(IqrOutlierFilter::new(f64::NAN).is_err());
        assert_eq!(IqrOutlierFilter::new(3.0).unwrap().multiplier(), 3.0);
    }
}

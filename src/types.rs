//! Tabular data handed to a [`crate::features::FeaturesList`].
//!
//! A [`Table`] is a row-major `f64` matrix with one name per column. Missing values are NaN.

use ndarray::{Array2, ArrayView1, Axis};

use crate::error::{PreprocessError, PreprocessResult};

/// Named-column numeric table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    values: Array2<f64>,
}

impl Table {
    /// Create a table from column names and a `(rows, columns)` matrix.
    ///
    /// Fails if the number of names does not match the number of matrix columns.
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> PreprocessResult<Self> {
        if columns.len() != values.ncols() {
            return Err(PreprocessError::SchemaMismatch {
                message: format!(
                    "{} column names for a matrix with {} columns",
                    columns.len(),
                    values.ncols()
                ),
            });
        }
        Ok(Self { columns, values })
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The underlying `(rows, columns)` matrix.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.values.nrows()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// A view of the named column, if present.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.index_of(name).map(|idx| self.values.column(idx))
    }

    /// A new table holding only `names`, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> PreprocessResult<Self> {
        let idxs = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name).ok_or_else(|| PreprocessError::SchemaMismatch {
                    message: format!("missing required column '{name}'. columns={:?}", self.columns),
                })
            })
            .collect::<PreprocessResult<Vec<_>>>()?;

        Ok(Self {
            columns: idxs.iter().map(|&i| self.columns[i].clone()).collect(),
            values: self.values.select(Axis(1), &idxs),
        })
    }
}

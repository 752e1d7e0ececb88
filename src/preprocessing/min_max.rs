//! Min-max scaling for a single numeric column.

use ndarray::{ArrayD, ArrayViewD};

use super::shape::single_feature;
use super::Preprocessor;
use crate::error::{PreprocessError, PreprocessResult};

const NAME: &str = "MinMaxScaler";

/// Added to the range so constant columns do not divide by zero.
pub const EPSILON: f64 = 1e-8;

/// Parameters learned by [`MinMaxScaler::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxParams {
    /// Smallest value seen during fit.
    pub min: f64,
    /// Largest value seen during fit.
    pub max: f64,
}

/// Scales a column into `[0, 1]` using the min/max seen at fit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinMaxScaler {
    params: Option<MinMaxParams>,
}

impl MinMaxScaler {
    /// Create an unfitted scaler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted parameters, if [`Preprocessor::fit`] has been called.
    pub fn params(&self) -> Option<MinMaxParams> {
        self.params
    }

    fn fitted(&self, operation: &'static str) -> PreprocessResult<MinMaxParams> {
        self.params
            .ok_or(PreprocessError::NotFitted { name: NAME, operation })
    }
}

impl Preprocessor for MinMaxScaler {
    fn fit(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<()> {
        let column = single_feature(xs, NAME)?;
        let mut values = column.iter().copied();
        let first = values.next().ok_or(PreprocessError::EmptyInput { name: NAME })?;
        let (min, max) = values.fold((first, first), |(min, max), v| {
            (nan_min(min, v), nan_max(max, v))
        });
        self.params = Some(MinMaxParams { min, max });
        Ok(())
    }

    fn transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        let MinMaxParams { min, max } = self.fitted("transform")?;
        single_feature(xs.view(), NAME)?;
        Ok(xs.mapv(|v| (v - min) / (max - min + EPSILON)))
    }

    fn inverse_transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        let MinMaxParams { min, max } = self.fitted("inverse_transform")?;
        // Only the literal all-zero and all-one columns are special; other constant columns
        // go through the affine formula.
        if min == 0.0 && max == 0.0 {
            return Ok(ArrayD::zeros(xs.raw_dim()));
        }
        if min == 1.0 && max == 1.0 {
            return Ok(ArrayD::ones(xs.raw_dim()));
        }
        Ok(xs.mapv(|v| v * (max - min) + min))
    }
}

// NaN-propagating reductions, matching a plain array min/max.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

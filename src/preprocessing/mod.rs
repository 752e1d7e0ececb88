//! Single-feature preprocessors.
//!
//! Every preprocessor here works on exactly one column: inputs are `(n,)` or `(n, 1)` arrays and
//! anything wider is rejected with [`crate::PreprocessError::Shape`].
//!
//! - [`MinMaxScaler`]: affine scaling into `[0, 1]`
//! - [`OneHotEncoder`]: indicator encoding of an integer-valued categorical column
//!
//! ## Example: one-hot encoding with a missing value
//!
//! ```rust
//! use ndarray::{arr1, arr2};
//! use rust_feature_preprocessing::preprocessing::{OneHotEncoder, Preprocessor};
//!
//! let mut encoder = OneHotEncoder::new();
//! encoder.fit(arr1(&[1.0, 2.0, 2.0, f64::NAN]).view().into_dyn()).unwrap();
//! assert_eq!(encoder.n_categories(), Some(3));
//!
//! let encoded = encoder.transform(arr1(&[1.0, 2.0, f64::NAN]).view().into_dyn()).unwrap();
//! assert_eq!(
//!     encoded,
//!     arr2(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).into_dyn()
//! );
//! ```

pub mod min_max;
pub mod one_hot;
pub mod shape;

use ndarray::{ArrayD, ArrayViewD};

use crate::error::PreprocessResult;

pub use min_max::{MinMaxParams, MinMaxScaler};
pub use one_hot::{Category, OneHotEncoder, OneHotParams};

/// Common contract for fit/transform preprocessors.
pub trait Preprocessor {
    /// Learn the preprocessor's parameters from `xs`, replacing any previous fit.
    fn fit(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<()>;

    /// Transform `xs` with the fitted parameters.
    fn transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>>;

    /// Fit on `xs`, then transform it.
    fn fit_transform(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        self.fit(xs.view())?;
        self.transform(xs)
    }

    /// Map transformed values back into the original space.
    fn inverse_transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>>;
}

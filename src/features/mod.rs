//! Named features and the column-wise composite over them.
//!
//! - [`Feature`]: one raw column paired with a [`FeaturePreprocessor`]
//! - [`FeaturesList`]: applies each feature to its column of a dataset matrix and concatenates
//!   the (variable-width) outputs; inverts them back into one column per feature
//!
//! ## Example: transform → inverse transform
//!
//! ```rust
//! use ndarray::{arr1, arr2};
//! use rust_feature_preprocessing::features::{Feature, FeaturesList};
//!
//! let xs = arr2(&[[0.5, 1.0], [1.5, 3.0], [2.5, 1.0]]);
//! let mut list = FeaturesList::new(vec![
//!     Feature::min_max("score", xs.column(0).to_owned()),
//!     Feature::one_hot("grade", xs.column(1).to_owned()),
//! ]);
//!
//! // One scaled column plus two indicator columns.
//! let encoded = list.transform(xs.view()).unwrap();
//! assert_eq!(encoded.ncols(), 3);
//!
//! let decoded = list.inverse_transform(encoded.view()).unwrap();
//! assert_eq!(decoded.column(1).to_vec(), vec![1.0, 3.0, 1.0]);
//! ```

mod feature;
mod list;

pub use feature::{Feature, FeaturePreprocessor};
pub use list::FeaturesList;

//! `rust-feature-preprocessing` prepares tabular numeric data for models: each column is a
//! [`features::Feature`] with its own preprocessor, and a [`features::FeaturesList`] applies them
//! column by column, concatenating the variable-width outputs into one matrix.
//!
//! The inverse transform splits that matrix back apart and recovers one column per feature.
//!
//! ## Preprocessors
//!
//! - [`preprocessing::MinMaxScaler`]: `(x - min) / (max - min + 1e-8)`, one output column
//! - [`preprocessing::OneHotEncoder`]: indicator rows, one column per category; NaN is the
//!   missing-value sentinel and always takes the last slot
//! - [`features::FeaturePreprocessor::Passthrough`]: values are left untouched
//!
//! Both preprocessors accept a single feature only: `(n,)` or `(n, 1)` arrays. Anything wider
//! fails with [`PreprocessError::Shape`].
//!
//! ## Quick example
//!
//! ```rust
//! use ndarray::arr2;
//! use rust_feature_preprocessing::features::{Feature, FeaturesList};
//!
//! # fn main() -> Result<(), rust_feature_preprocessing::PreprocessError> {
//! let xs = arr2(&[
//!     [0.5, 1.0],
//!     [2.5, 2.0],
//!     [4.5, f64::NAN],
//! ]);
//! let mut list = FeaturesList::new(vec![
//!     Feature::min_max("score", xs.column(0).to_owned()),
//!     Feature::one_hot("grade", xs.column(1).to_owned()),
//! ]);
//!
//! let encoded = list.transform(xs.view())?;
//! assert_eq!(encoded.ncols(), 1 + 3);
//! assert!((encoded[[2, 0]] - 1.0).abs() < 1e-6);
//! // The missing grade lands in the last indicator column.
//! assert_eq!(encoded.row(2).iter().skip(1).copied().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading data and declaring features
//!
//! ```no_run
//! use rust_feature_preprocessing::config::FeaturesConfig;
//! use rust_feature_preprocessing::ingestion::table_from_csv_path;
//!
//! # fn main() -> Result<(), rust_feature_preprocessing::PreprocessError> {
//! let table = table_from_csv_path("data.csv")?;
//! let config = FeaturesConfig::from_json_path("features.json")?;
//! let mut list = config.build(&table)?;
//! let encoded = list.transform_table(&table)?;
//! let restored = list.inverse_transform_table(encoded.view())?;
//! println!("rows={}", restored.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Inverse transform caveat
//!
//! [`features::FeaturesList::inverse_transform`] decides each feature's width from its raw data:
//! only features whose raw values are all non-integral are read back as a single column, the rest
//! are decoded as one-hot. See [`features::Feature::is_continuous`].
//!
//! ## Modules
//!
//! - [`preprocessing`]: single-feature preprocessors and the [`preprocessing::Preprocessor`] trait
//! - [`features`]: features and the column-wise composite
//! - [`types`]: the named-column [`types::Table`]
//! - [`ingestion`]: CSV loading
//! - [`config`]: JSON feature layouts
//! - [`observability`]: observer hooks for per-feature events
//! - [`error`]: the crate error type

pub mod config;
pub mod error;
pub mod features;
pub mod ingestion;
pub mod observability;
pub mod preprocessing;
pub mod types;

pub use error::{PreprocessError, PreprocessResult};

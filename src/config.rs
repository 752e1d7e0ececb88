//! Declarative feature layouts.
//!
//! A [`FeaturesConfig`] names the columns to use and the preprocessor for each, and can be
//! loaded from JSON:
//!
//! ```json
//! { "features": [
//!     { "name": "age", "preprocessor": "min_max" },
//!     { "name": "color", "preprocessor": "one_hot" },
//!     { "name": "id" }
//! ] }
//! ```
//!
//! A missing `preprocessor` means [`PreprocessorKind::Passthrough`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, PreprocessResult};
use crate::features::{Feature, FeaturePreprocessor, FeaturesList};
use crate::preprocessing::{MinMaxScaler, OneHotEncoder};
use crate::types::Table;

/// Preprocessor selection for a configured feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreprocessorKind {
    /// No preprocessing.
    #[default]
    Passthrough,
    /// [`MinMaxScaler`].
    MinMax,
    /// [`OneHotEncoder`].
    OneHot,
}

impl PreprocessorKind {
    /// A fresh, unfitted preprocessor of this kind.
    pub fn build(self) -> FeaturePreprocessor {
        match self {
            PreprocessorKind::Passthrough => FeaturePreprocessor::Passthrough,
            PreprocessorKind::MinMax => FeaturePreprocessor::MinMax(MinMaxScaler::new()),
            PreprocessorKind::OneHot => FeaturePreprocessor::OneHot(OneHotEncoder::new()),
        }
    }
}

/// One configured feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Column name in the source [`Table`].
    pub name: String,
    #[serde(default)]
    pub preprocessor: PreprocessorKind,
}

impl FeatureConfig {
    /// Create a feature entry for column `name`.
    pub fn new(name: impl Into<String>, preprocessor: PreprocessorKind) -> Self {
        Self {
            name: name.into(),
            preprocessor,
        }
    }
}

/// Ordered feature layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    pub features: Vec<FeatureConfig>,
}

impl FeaturesConfig {
    /// Create a layout from feature entries, in output order.
    pub fn new(features: Vec<FeatureConfig>) -> Self {
        Self { features }
    }

    /// Parse a layout from a JSON string.
    pub fn from_json_str(json: &str) -> PreprocessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a layout from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> PreprocessResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Build a [`FeaturesList`] whose features take their raw data from `table`.
    ///
    /// Every configured name must be a column of `table`.
    pub fn build(&self, table: &Table) -> PreprocessResult<FeaturesList> {
        let features = self
            .features
            .iter()
            .map(|cfg| {
                let data = table
                    .column(&cfg.name)
                    .ok_or_else(|| PreprocessError::SchemaMismatch {
                        message: format!(
                            "missing required column '{}'. columns={:?}",
                            cfg.name,
                            table.columns()
                        ),
                    })?
                    .to_owned();
                Ok(Feature::new(cfg.name.clone(), data, cfg.preprocessor.build()))
            })
            .collect::<PreprocessResult<Vec<_>>>()?;
        Ok(FeaturesList::new(features))
    }
}

//! A single named column plus its preprocessing strategy.

use ndarray::{Array1, Array2, ArrayD, ArrayViewD};

use crate::config::PreprocessorKind;
use crate::error::PreprocessResult;
use crate::preprocessing::shape::to_2d;
use crate::preprocessing::{MinMaxScaler, OneHotEncoder, Preprocessor};

/// The preprocessor owned by a [`Feature`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeaturePreprocessor {
    /// Values pass through untouched.
    #[default]
    Passthrough,
    /// Min-max scaling.
    MinMax(MinMaxScaler),
    /// One-hot encoding.
    OneHot(OneHotEncoder),
}

impl FeaturePreprocessor {
    /// The configuration kind this preprocessor corresponds to.
    pub fn kind(&self) -> PreprocessorKind {
        match self {
            FeaturePreprocessor::Passthrough => PreprocessorKind::Passthrough,
            FeaturePreprocessor::MinMax(_) => PreprocessorKind::MinMax,
            FeaturePreprocessor::OneHot(_) => PreprocessorKind::OneHot,
        }
    }

    /// The one-hot encoder, if this is a one-hot preprocessor.
    pub fn as_one_hot(&self) -> Option<&OneHotEncoder> {
        match self {
            FeaturePreprocessor::OneHot(encoder) => Some(encoder),
            _ => None,
        }
    }
}

impl Preprocessor for FeaturePreprocessor {
    fn fit(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<()> {
        match self {
            FeaturePreprocessor::Passthrough => Ok(()),
            FeaturePreprocessor::MinMax(scaler) => scaler.fit(xs),
            FeaturePreprocessor::OneHot(encoder) => encoder.fit(xs),
        }
    }

    fn transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        match self {
            FeaturePreprocessor::Passthrough => Ok(xs.to_owned()),
            FeaturePreprocessor::MinMax(scaler) => scaler.transform(xs),
            FeaturePreprocessor::OneHot(encoder) => encoder.transform(xs),
        }
    }

    fn inverse_transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        match self {
            FeaturePreprocessor::Passthrough => Ok(xs.to_owned()),
            FeaturePreprocessor::MinMax(scaler) => scaler.inverse_transform(xs),
            FeaturePreprocessor::OneHot(encoder) => encoder.inverse_transform(xs),
        }
    }
}

/// A named feature: its raw source column and the preprocessor applied to it.
///
/// `data` is only consulted by [`Feature::is_continuous`]; the values that get transformed are
/// whatever column is handed to [`Feature::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    data: Array1<f64>,
    preprocessor: FeaturePreprocessor,
}

impl Feature {
    /// Create a feature from its name, raw data and preprocessor.
    pub fn new(name: impl Into<String>, data: Array1<f64>, preprocessor: FeaturePreprocessor) -> Self {
        Self {
            name: name.into(),
            data,
            preprocessor,
        }
    }

    /// A feature whose values pass through untouched.
    pub fn passthrough(name: impl Into<String>, data: Array1<f64>) -> Self {
        Self::new(name, data, FeaturePreprocessor::Passthrough)
    }

    /// A min-max scaled feature.
    pub fn min_max(name: impl Into<String>, data: Array1<f64>) -> Self {
        Self::new(name, data, FeaturePreprocessor::MinMax(MinMaxScaler::new()))
    }

    /// A one-hot encoded feature.
    pub fn one_hot(name: impl Into<String>, data: Array1<f64>) -> Self {
        Self::new(name, data, FeaturePreprocessor::OneHot(OneHotEncoder::new()))
    }

    /// Feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw source column used by [`Feature::is_continuous`].
    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    /// The preprocessor, including its fitted state.
    pub fn preprocessor(&self) -> &FeaturePreprocessor {
        &self.preprocessor
    }

    /// Fit the preprocessor on `xs` and transform it, returning a 2-D block.
    ///
    /// The preprocessor is refitted on every call.
    pub fn transform(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<Array2<f64>> {
        let out = self.preprocessor.fit_transform(xs)?;
        to_2d(out, &self.name)
    }

    /// Invert a block produced by [`Feature::transform`], returning a 2-D block.
    pub fn inverse_transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<Array2<f64>> {
        let out = self.preprocessor.inverse_transform(xs)?;
        to_2d(out, &self.name)
    }

    /// Whether the inverse transform treats this feature as a single continuous column.
    ///
    /// True only when every raw value is non-integral. Integer-valued continuous features are
    /// therefore classified as categorical; callers relying on the inverse transform need raw
    /// data that makes this distinction hold.
    pub fn is_continuous(&self) -> bool {
        self.data.iter().all(|v| v % 1.0 != 0.0)
    }

    /// Number of output columns produced by [`Feature::transform`].
    ///
    /// `None` for a one-hot feature that has not been fitted yet.
    pub fn output_width(&self) -> Option<usize> {
        match &self.preprocessor {
            FeaturePreprocessor::Passthrough | FeaturePreprocessor::MinMax(_) => Some(1),
            FeaturePreprocessor::OneHot(encoder) => encoder.n_categories(),
        }
    }
}

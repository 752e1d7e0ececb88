//! Column-wise transform and inverse transform across an ordered list of features.

use std::fmt;
use std::sync::Arc;

use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use super::feature::Feature;
use crate::error::{PreprocessError, PreprocessResult};
use crate::observability::{FeatureContext, FeatureStats, TransformObserver};
use crate::types::Table;

const NAME: &str = "FeaturesList";

/// An ordered list of [`Feature`]s applied column by column to a dataset matrix.
///
/// Feature `i` reads column `i` of the input; outputs are concatenated in feature order.
#[derive(Clone, Default)]
pub struct FeaturesList {
    features: Vec<Feature>,
    observer: Option<Arc<dyn TransformObserver>>,
}

impl fmt::Debug for FeaturesList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeaturesList")
            .field("features", &self.features)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl FeaturesList {
    /// Create a list from features in input column order.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            observer: None,
        }
    }

    /// Attach an observer for per-feature events.
    pub fn with_observer(mut self, observer: Arc<dyn TransformObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Features in order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the list holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature names in order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(Feature::name)
    }

    /// Total number of columns [`FeaturesList::transform`] produces.
    ///
    /// `None` while any one-hot feature is unfitted.
    pub fn output_width(&self) -> Option<usize> {
        self.features.iter().map(Feature::output_width).sum()
    }

    /// Fit and transform every feature on its column of `xs`, concatenating the results.
    pub fn transform(&mut self, xs: ArrayView2<'_, f64>) -> PreprocessResult<Array2<f64>> {
        if xs.ncols() < self.features.len() {
            return Err(PreprocessError::Width {
                name: NAME.to_owned(),
                expected: self.features.len(),
                actual: xs.ncols(),
            });
        }

        let mut blocks = Vec::with_capacity(self.features.len());
        for (i, feature) in self.features.iter_mut().enumerate() {
            let result = feature.transform(xs.column(i).into_dyn());
            let block = report(self.observer.as_deref(), i, feature, result, Event::Transformed)?;
            blocks.push(block);
        }
        concat_columns(xs.nrows(), &blocks)
    }

    /// Transform the columns of `table` named by the features, in feature order.
    pub fn transform_table(&mut self, table: &Table) -> PreprocessResult<Array2<f64>> {
        let names = self.feature_names().map(str::to_owned).collect::<Vec<_>>();
        let selected = table.select(&names)?;
        self.transform(selected.values().view())
    }

    /// Invert a matrix produced by [`FeaturesList::transform`].
    ///
    /// Output widths are re-derived from each feature's raw data: a feature whose raw values are
    /// all non-integral ([`Feature::is_continuous`]) consumes one column, any other feature is
    /// decoded as one-hot and consumes `n_categories` columns. A continuous feature with an
    /// integer value somewhere in its raw data is misread as categorical.
    pub fn inverse_transform(&self, xs: ArrayView2<'_, f64>) -> PreprocessResult<Array2<f64>> {
        let mut blocks = Vec::with_capacity(self.features.len());
        let mut cursor = 0;
        for (i, feature) in self.features.iter().enumerate() {
            let result = self.inverse_one(feature, xs, cursor);
            let (block, consumed) =
                report(self.observer.as_deref(), i, feature, result, Event::Inverted)?;
            blocks.push(block);
            cursor += consumed;
        }
        concat_columns(xs.nrows(), &blocks)
    }

    /// Invert `xs` and label the recovered columns with the feature names.
    pub fn inverse_transform_table(&self, xs: ArrayView2<'_, f64>) -> PreprocessResult<Table> {
        let values = self.inverse_transform(xs)?;
        Table::new(self.feature_names().map(str::to_owned).collect(), values)
    }

    fn inverse_one(
        &self,
        feature: &Feature,
        xs: ArrayView2<'_, f64>,
        cursor: usize,
    ) -> PreprocessResult<(Array2<f64>, usize)> {
        if feature.is_continuous() {
            check_bounds(xs.ncols(), cursor + 1)?;
            let block = feature.inverse_transform(xs.column(cursor).into_dyn())?;
            return Ok((block, 1));
        }

        let width = feature
            .preprocessor()
            .as_one_hot()
            .and_then(|encoder| encoder.n_categories())
            .ok_or_else(|| PreprocessError::NotCategorical {
                feature: feature.name().to_owned(),
            })?;
        check_bounds(xs.ncols(), cursor + width)?;
        let block = feature.inverse_transform(xs.slice(s![.., cursor..cursor + width]).into_dyn())?;
        Ok((block, width))
    }
}

#[derive(Clone, Copy)]
enum Event {
    Transformed,
    Inverted,
}

/// Forwards a feature's outcome to the observer and passes the result through.
fn report<T: Block>(
    observer: Option<&dyn TransformObserver>,
    index: usize,
    feature: &Feature,
    result: PreprocessResult<T>,
    event: Event,
) -> PreprocessResult<T> {
    let Some(observer) = observer else {
        return result;
    };
    let ctx = FeatureContext {
        index,
        name: feature.name().to_owned(),
        kind: feature.preprocessor().kind(),
    };
    match &result {
        Ok(out) => {
            let stats = out.stats();
            match event {
                Event::Transformed => observer.on_transformed(&ctx, stats),
                Event::Inverted => observer.on_inverted(&ctx, stats),
            }
        }
        Err(e) => observer.on_failure(&ctx, e),
    }
    result
}

trait Block {
    fn stats(&self) -> FeatureStats;
}

impl Block for Array2<f64> {
    fn stats(&self) -> FeatureStats {
        FeatureStats {
            rows: self.nrows(),
            columns: self.ncols(),
        }
    }
}

impl Block for (Array2<f64>, usize) {
    fn stats(&self) -> FeatureStats {
        self.0.stats()
    }
}

fn check_bounds(available: usize, needed: usize) -> PreprocessResult<()> {
    if needed > available {
        return Err(PreprocessError::Width {
            name: NAME.to_owned(),
            expected: needed,
            actual: available,
        });
    }
    Ok(())
}

fn concat_columns(rows: usize, blocks: &[Array2<f64>]) -> PreprocessResult<Array2<f64>> {
    if blocks.is_empty() {
        return Ok(Array2::zeros((rows, 0)));
    }
    let views = blocks.iter().map(|b| b.view()).collect::<Vec<_>>();
    Ok(concatenate(Axis(1), &views)?)
}

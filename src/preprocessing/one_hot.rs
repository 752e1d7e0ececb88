//! One-hot encoding for a single integer-valued categorical column.
//!
//! NaN is the missing-value sentinel: it always occupies the last slot.

use std::cmp::Ordering;

use ndarray::{Array2, ArrayD, ArrayViewD, Ix2};

use super::shape::single_feature;
use super::Preprocessor;
use crate::error::{PreprocessError, PreprocessResult};

const NAME: &str = "OneHotEncoder";

/// A category known to a fitted [`OneHotEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A regular category, keyed by the integer part of the value seen at fit time.
    Value(i64),
    /// The missing-value (NaN) category.
    Missing,
}

impl Category {
    /// The numeric value this category decodes to (`NaN` for [`Category::Missing`]).
    pub fn to_f64(self) -> f64 {
        match self {
            Category::Value(v) => v as f64,
            Category::Missing => f64::NAN,
        }
    }
}

/// Parameters learned by [`OneHotEncoder::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotParams {
    /// Distinct non-NaN values in ascending order; position is the slot.
    levels: Vec<f64>,
    has_missing: bool,
}

impl OneHotParams {
    fn from_column<'a>(values: impl Iterator<Item = &'a f64>) -> Self {
        let mut has_missing = false;
        let mut levels: Vec<f64> = values
            .copied()
            .filter(|v| {
                let nan = v.is_nan();
                has_missing |= nan;
                !nan
            })
            .map(unsigned_zero)
            .collect();
        levels.sort_by(f64::total_cmp);
        levels.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
        Self { levels, has_missing }
    }

    /// Total number of categories, counting the missing category once if present.
    pub fn n_categories(&self) -> usize {
        self.levels.len() + usize::from(self.has_missing)
    }

    /// Whether NaN was seen at fit time.
    pub fn has_missing(&self) -> bool {
        self.has_missing
    }

    /// The category stored in `slot`, if any.
    pub fn category(&self, slot: usize) -> Option<Category> {
        match self.levels.get(slot) {
            Some(v) => Some(Category::Value(*v as i64)),
            None if self.has_missing && slot == self.levels.len() => Some(Category::Missing),
            None => None,
        }
    }

    /// Categories paired with their slots, in slot order.
    ///
    /// Slots are assigned per distinct fit value, while keys keep only the integer part, so
    /// non-integral values sharing an integer part (e.g. `1.2` and `1.7`) get separate slots
    /// that both report `Value(1)`.
    pub fn category_map(&self) -> Vec<(Category, usize)> {
        (0..self.n_categories())
            .filter_map(|slot| self.category(slot).map(|c| (c, slot)))
            .collect()
    }

    /// Slot for a raw value. NaN goes to the last slot; unseen values have none.
    pub fn slot_of(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return self.n_categories().checked_sub(1);
        }
        self.levels
            .binary_search_by(|level| level.total_cmp(&unsigned_zero(value)))
            .ok()
    }
}

// `total_cmp` orders -0.0 before 0.0; both must land in the same category.
fn unsigned_zero(v: f64) -> f64 {
    v + 0.0
}

/// Encodes a categorical column as indicator rows of width `n_categories`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneHotEncoder {
    params: Option<OneHotParams>,
}

impl OneHotEncoder {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted parameters, if [`Preprocessor::fit`] has been called.
    pub fn params(&self) -> Option<&OneHotParams> {
        self.params.as_ref()
    }

    /// Number of categories learned at fit time.
    pub fn n_categories(&self) -> Option<usize> {
        self.params.as_ref().map(OneHotParams::n_categories)
    }

    /// Learned categories and their slots, or an empty list before fit.
    pub fn category_map(&self) -> Vec<(Category, usize)> {
        self.params
            .as_ref()
            .map(OneHotParams::category_map)
            .unwrap_or_default()
    }

    fn fitted(&self, operation: &'static str) -> PreprocessResult<&OneHotParams> {
        self.params
            .as_ref()
            .ok_or(PreprocessError::NotFitted { name: NAME, operation })
    }
}

impl Preprocessor for OneHotEncoder {
    fn fit(&mut self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<()> {
        let column = single_feature(xs, NAME)?;
        self.params = Some(OneHotParams::from_column(column.iter()));
        Ok(())
    }

    fn transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        let params = self.fitted("transform")?;
        let column = single_feature(xs, NAME)?;

        let mut out = Array2::<f64>::zeros((column.len(), params.n_categories()));
        for (row, &value) in column.iter().enumerate() {
            if let Some(slot) = params.slot_of(value) {
                out[[row, slot]] = 1.0;
            }
        }
        Ok(out.into_dyn())
    }

    fn inverse_transform(&self, xs: ArrayViewD<'_, f64>) -> PreprocessResult<ArrayD<f64>> {
        let params = self.fitted("inverse_transform")?;
        let shape = xs.shape().to_vec();
        let indicators = xs
            .into_dimensionality::<Ix2>()
            .map_err(|_| PreprocessError::Shape {
                name: NAME.to_owned(),
                shape,
            })?;

        let expected = params.n_categories();
        if indicators.ncols() != expected {
            return Err(PreprocessError::Width {
                name: NAME.to_owned(),
                expected,
                actual: indicators.ncols(),
            });
        }
        if expected == 0 && indicators.nrows() > 0 {
            return Err(PreprocessError::EmptyInput { name: NAME });
        }

        let decoded = indicators
            .rows()
            .into_iter()
            .map(|row| {
                let slot = arg_max(row.iter().copied());
                params.category(slot).map_or(f64::NAN, Category::to_f64)
            })
            .collect::<Vec<_>>();
        let n = decoded.len();
        Ok(Array2::from_shape_vec((n, 1), decoded)?.into_dyn())
    }
}

/// Index of the largest value; ties keep the first occurrence.
fn arg_max(values: impl Iterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, v) in values.enumerate() {
        if i == 0 || v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{arg_max, Category, OneHotEncoder};
    use crate::error::PreprocessError;
    use crate::preprocessing::Preprocessor;
    use ndarray::{arr1, arr2, Array2};

    fn fitted(values: &[f64]) -> OneHotEncoder {
        let mut encoder = OneHotEncoder::new();
        encoder.fit(arr1(values).view().into_dyn()).unwrap();
        encoder
    }

    #[test]
    fn missing_category_takes_the_last_slot() {
        let encoder = fitted(&[1.0, 2.0, 2.0, f64::NAN]);
        assert_eq!(encoder.n_categories(), Some(3));
        assert!(encoder.params().unwrap().has_missing());
        assert_eq!(
            encoder.category_map(),
            vec![
                (Category::Value(1), 0),
                (Category::Value(2), 1),
                (Category::Missing, 2),
            ]
        );

        let out = encoder
            .transform(arr1(&[1.0, 2.0, f64::NAN]).view().into_dyn())
            .unwrap();
        assert_eq!(
            out,
            arr2(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).into_dyn()
        );
    }

    #[test]
    fn signed_zeros_share_one_category() {
        let encoder = fitted(&[0.0, -0.0, 1.0]);
        assert_eq!(encoder.n_categories(), Some(2));
        assert_eq!(
            encoder.category_map(),
            vec![(Category::Value(0), 0), (Category::Value(1), 1)]
        );

        let out = encoder
            .transform(arr1(&[-0.0, 0.0]).view().into_dyn())
            .unwrap();
        assert_eq!(out, arr2(&[[1.0, 0.0], [1.0, 0.0]]).into_dyn());
    }

    #[test]
    fn values_sharing_an_integer_part_keep_separate_slots() {
        let encoder = fitted(&[1.2, 1.7]);
        assert_eq!(
            encoder.category_map(),
            vec![(Category::Value(1), 0), (Category::Value(1), 1)]
        );
        let decoded = encoder
            .inverse_transform(arr2(&[[0.0, 1.0]]).view().into_dyn())
            .unwrap();
        assert_eq!(decoded, arr2(&[[1.0]]).into_dyn());
    }

    #[test]
    fn empty_column_yields_zero_categories() {
        let mut encoder = OneHotEncoder::new();
        let out = encoder
            .fit_transform(arr1::<f64>(&[]).view().into_dyn())
            .unwrap();
        assert_eq!(encoder.n_categories(), Some(0));
        assert_eq!(out.shape(), &[0, 0]);
        assert!(!encoder.params().unwrap().has_missing());

        let err = encoder
            .inverse_transform(Array2::<f64>::zeros((1, 0)).view().into_dyn())
            .unwrap_err();
        assert!(matches!(err, PreprocessError::EmptyInput { .. }));
    }

    #[test]
    fn slots_follow_ascending_value_order() {
        let encoder = fitted(&[7.0, -2.0, 3.0, 7.0]);
        assert_eq!(
            encoder.category_map(),
            vec![
                (Category::Value(-2), 0),
                (Category::Value(3), 1),
                (Category::Value(7), 2),
            ]
        );
    }

    #[test]
    fn round_trip_reconstructs_column() {
        let column = arr2(&[[3.0], [1.0], [3.0], [2.0], [1.0]]);
        let mut encoder = OneHotEncoder::new();
        let encoded = encoder.fit_transform(column.view().into_dyn()).unwrap();
        assert_eq!(encoded.shape(), &[5, 3]);

        let decoded = encoder.inverse_transform(encoded.view()).unwrap();
        assert_eq!(decoded, column.into_dyn());
    }

    #[test]
    fn inverse_maps_missing_slot_back_to_nan() {
        let encoder = fitted(&[0.0, f64::NAN]);
        let decoded = encoder
            .inverse_transform(arr2(&[[0.0, 1.0], [0.9, 0.1]]).view().into_dyn())
            .unwrap();
        assert!(decoded[[0, 0]].is_nan());
        assert_eq!(decoded[[1, 0]], 0.0);
    }

    #[test]
    fn inverse_does_not_chain_slot_replacements() {
        // Slot 0 decodes to 1 and slot 1 decodes to 2; a decoded 1 must not be re-mapped.
        let encoder = fitted(&[1.0, 2.0, 3.0]);
        let decoded = encoder
            .inverse_transform(arr2(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).view().into_dyn())
            .unwrap();
        assert_eq!(decoded, arr2(&[[1.0], [2.0]]).into_dyn());
    }

    #[test]
    fn unseen_values_encode_as_zero_rows() {
        let encoder = fitted(&[1.0, 2.0]);
        let out = encoder
            .transform(arr1(&[5.0]).view().into_dyn())
            .unwrap();
        assert_eq!(out, arr2(&[[0.0, 0.0]]).into_dyn());
    }

    #[test]
    fn nan_without_fitted_missing_uses_last_slot() {
        let encoder = fitted(&[1.0, 2.0]);
        let out = encoder
            .transform(arr1(&[f64::NAN]).view().into_dyn())
            .unwrap();
        assert_eq!(out, arr2(&[[0.0, 1.0]]).into_dyn());
    }

    #[test]
    fn arg_max_prefers_first_on_ties() {
        assert_eq!(arg_max([0.5, 0.5, 0.1].into_iter()), 0);
        assert_eq!(arg_max([0.1, 0.7, 0.7].into_iter()), 1);
        assert_eq!(arg_max([-3.0, -1.0].into_iter()), 1);
    }

    #[test]
    fn shape_and_width_errors() {
        let mut encoder = OneHotEncoder::new();
        let err = encoder
            .fit(arr2(&[[1.0, 2.0], [3.0, 4.0]]).view().into_dyn())
            .unwrap_err();
        assert!(err.to_string().contains("`OneHotEncoder` only supports array with a single feature"));

        let encoder = fitted(&[1.0, 2.0, 3.0]);
        let err = encoder
            .inverse_transform(arr2(&[[1.0, 0.0]]).view().into_dyn())
            .unwrap_err();
        assert!(matches!(err, PreprocessError::Width { expected: 3, actual: 2, .. }));

        let err = encoder
            .inverse_transform(arr1(&[1.0, 0.0, 0.0]).view().into_dyn())
            .unwrap_err();
        assert!(matches!(err, PreprocessError::Shape { .. }));
    }

    #[test]
    fn transform_before_fit_is_an_error() {
        let encoder = OneHotEncoder::new();
        assert_eq!(encoder.n_categories(), None);
        assert!(encoder.category_map().is_empty());
        let err = encoder
            .transform(arr1(&[1.0]).view().into_dyn())
            .unwrap_err();
        assert!(matches!(err, PreprocessError::NotFitted { .. }));
    }
}

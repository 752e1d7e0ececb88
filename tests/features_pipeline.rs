use ndarray::{arr1, arr2, Array2};

use rust_feature_preprocessing::config::{FeatureConfig, FeaturesConfig, PreprocessorKind};
use rust_feature_preprocessing::features::{Feature, FeaturesList};
use rust_feature_preprocessing::ingestion::table_from_csv_path;
use rust_feature_preprocessing::preprocessing::{MinMaxScaler, OneHotEncoder, Preprocessor};
use rust_feature_preprocessing::PreprocessError;

fn assert_close(actual: &Array2<f64>, expected: &Array2<f64>) {
    assert_eq!(actual.shape(), expected.shape());
    for (a, e) in actual.iter().zip(expected.iter()) {
        if e.is_nan() {
            assert!(a.is_nan(), "expected NaN, got {a}");
        } else {
            assert!((a - e).abs() < 1e-6, "expected {e}, got {a}");
        }
    }
}

#[test]
fn csv_to_features_round_trip() {
    let table = table_from_csv_path("tests/fixtures/mixed.csv").unwrap();
    let config = FeaturesConfig::from_json_path("tests/fixtures/features.json").unwrap();
    let mut list = config.build(&table).unwrap();

    let encoded = list.transform_table(&table).unwrap();
    // score: 1 column; grade: {1, 2, missing} -> 3 columns.
    assert_eq!(encoded.shape(), &[4, 4]);
    assert_eq!(list.output_width(), Some(4));
    assert_eq!(encoded.row(2).iter().skip(1).copied().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0]);

    let restored = list.inverse_transform_table(encoded.view()).unwrap();
    assert_eq!(restored.columns(), &["score", "grade"]);
    let expected = table.select(&["score", "grade"]).unwrap();
    assert_close(restored.values(), expected.values());
}

#[test]
fn output_width_is_the_sum_of_feature_widths() {
    let xs = arr2(&[
        [0.25, 3.0, 7.0, 0.5],
        [0.75, 1.0, 8.0, 0.5],
        [1.25, 2.0, 9.0, 1.5],
        [1.75, 3.0, 7.0, 2.5],
    ]);
    let mut list = FeaturesList::new(vec![
        Feature::min_max("a", xs.column(0).to_owned()),
        Feature::one_hot("b", xs.column(1).to_owned()),
        Feature::one_hot("c", xs.column(2).to_owned()),
        Feature::passthrough("d", xs.column(3).to_owned()),
    ]);

    let encoded = list.transform(xs.view()).unwrap();
    assert_eq!(encoded.ncols(), 1 + 3 + 3 + 1);

    let decoded = list.inverse_transform(encoded.view()).unwrap();
    assert_close(&decoded, &xs);
}

#[test]
fn extra_input_columns_are_ignored() {
    let xs = arr2(&[[0.5, 99.0], [1.5, 98.0]]);
    let mut list = FeaturesList::new(vec![Feature::min_max("a", arr1(&[0.5, 1.5]))]);
    let encoded = list.transform(xs.view()).unwrap();
    assert_eq!(encoded.ncols(), 1);
}

#[test]
fn transform_refits_with_new_data() {
    let mut list = FeaturesList::new(vec![Feature::one_hot("g", arr1(&[1.0, 2.0]))]);
    let first = list.transform(arr2(&[[1.0], [2.0]]).view()).unwrap();
    assert_eq!(first.ncols(), 2);

    let second = list.transform(arr2(&[[1.0], [2.0], [5.0]]).view()).unwrap();
    assert_eq!(second.ncols(), 3);
    assert_eq!(list.output_width(), Some(3));
}

#[test]
fn categorical_feature_without_encoder_fails_inverse() {
    let table = table_from_csv_path("tests/fixtures/mixed.csv").unwrap();
    let mut list = FeaturesConfig::new(vec![FeatureConfig::new("id", PreprocessorKind::MinMax)])
        .build(&table)
        .unwrap();

    let encoded = list.transform_table(&table).unwrap();
    let err = list.inverse_transform(encoded.view()).unwrap_err();
    assert!(err.to_string().contains("feature 'id' is treated as categorical"));
}

#[test]
fn leaf_preprocessors_reject_wide_inputs() {
    let wide = arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);

    let err = MinMaxScaler::new().fit(wide.view().into_dyn()).unwrap_err();
    assert!(matches!(err, PreprocessError::Shape { .. }));
    assert_eq!(
        err.to_string(),
        "`MinMaxScaler` only supports array with a single feature, but got shape=[3, 2]."
    );

    let err = OneHotEncoder::new().fit(wide.view().into_dyn()).unwrap_err();
    assert!(matches!(err, PreprocessError::Shape { .. }));
}

#[test]
fn transform_table_requires_feature_columns() {
    let table = table_from_csv_path("tests/fixtures/mixed.csv").unwrap();
    let mut list = FeaturesList::new(vec![Feature::min_max("missing", arr1(&[0.5]))]);
    let err = list.transform_table(&table).unwrap_err();
    assert!(err.to_string().contains("schema mismatch"));
}

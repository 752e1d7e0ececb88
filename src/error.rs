use thiserror::Error;

/// Convenience result type for preprocessing operations.
pub type PreprocessResult<T> = Result<T, PreprocessError>;

/// Error type returned by preprocessors, features and table loading.
///
/// A single enum is shared across the crate so callers can propagate everything with `?`.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Feature layout could not be deserialized.
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array reshaping/concatenation failed inside `ndarray`.
    #[error("array error: {0}")]
    Array(#[from] ndarray::ShapeError),

    /// Input to a single-feature preprocessor is neither `(n,)` nor `(n, 1)`.
    #[error("`{name}` only supports array with a single feature, but got shape={shape:?}.")]
    Shape { name: String, shape: Vec<usize> },

    /// A 2-D input has the wrong number of columns.
    #[error("`{name}` expected {expected} columns, but got {actual}")]
    Width {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// `transform`/`inverse_transform` was called before `fit`.
    #[error("`{name}` must be fitted before calling `{operation}`")]
    NotFitted {
        name: &'static str,
        operation: &'static str,
    },

    /// The preprocessor cannot be fitted on an empty column.
    #[error("`{name}` cannot be fitted on an empty column")]
    EmptyInput { name: &'static str },

    /// The inverse transform treated a feature as categorical but it has no fitted one-hot encoder.
    #[error("feature '{feature}' is treated as categorical but has no fitted one-hot encoder")]
    NotCategorical { feature: String },

    /// Column names do not line up with the data or with the requested features.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A CSV cell could not be parsed as a number.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

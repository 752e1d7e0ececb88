//! Input shape validation shared by the single-feature preprocessors.

use ndarray::{Array2, ArrayD, ArrayView1, ArrayViewD, Axis, Ix1, Ix2};

use crate::error::{PreprocessError, PreprocessResult};

/// Validates that `xs` holds a single feature and returns it as a 1-D view.
///
/// Accepted shapes are `(n,)` and `(n, 1)`; everything else is a [`PreprocessError::Shape`].
pub fn single_feature<'a>(xs: ArrayViewD<'a, f64>, name: &str) -> PreprocessResult<ArrayView1<'a, f64>> {
    let shape = xs.shape().to_vec();
    let column = match shape.as_slice() {
        [_] => xs,
        [_, 1] => xs.index_axis_move(Axis(1), 0),
        _ => return Err(shape_error(name, shape.clone())),
    };
    column
        .into_dimensionality::<Ix1>()
        .map_err(|_| shape_error(name, shape))
}

/// Reshapes a preprocessor output into two dimensions.
///
/// `(n,)` becomes `(n, 1)`, 2-D arrays pass through, any other rank is a shape error.
pub fn to_2d(xs: ArrayD<f64>, name: &str) -> PreprocessResult<Array2<f64>> {
    match xs.ndim() {
        1 => {
            let n = xs.len();
            Ok(Array2::from_shape_vec((n, 1), xs.iter().copied().collect())?)
        }
        2 => Ok(xs.into_dimensionality::<Ix2>()?),
        _ => Err(shape_error(name, xs.shape().to_vec())),
    }
}

fn shape_error(name: &str, shape: Vec<usize>) -> PreprocessError {
    PreprocessError::Shape {
        name: name.to_owned(),
        shape,
    }
}

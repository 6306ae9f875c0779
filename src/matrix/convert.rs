//! Преобразования в `ndarray::Array2` и обратно

use ndarray::Array2;

use super::types::Matrix;
use crate::error::MatrixError;

impl Matrix {
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.n, self.n), |(i, j)| self.data[i * self.n + j])
    }
}

impl TryFrom<&Array2<f64>> for Matrix {
    type Error = MatrixError;

    /// Элементы берутся в логическом построчном порядке,
    /// раскладка массива в памяти не важна
    fn try_from(array: &Array2<f64>) -> Result<Self, Self::Error> {
        let (rows, cols) = array.dim();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Matrix::from_vec(rows, array.iter().copied().collect())
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(array: Array2<f64>) -> Result<Self, Self::Error> {
        Matrix::try_from(&array)
    }
}

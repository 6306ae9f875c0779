//! Операции над матрицами

use super::types::{Matrix, MatrixType};
use crate::error::{MatrixError, Result};
use crate::DEFAULT_TOLERANCE;

/// Инициализирует пару матриц заданного типа и размера
pub fn initialize_matrices(matrix_type: MatrixType, size: usize) -> (Matrix, Matrix) {
    // для Random каждый вызов берет новые значения
    let a = Matrix::filled(matrix_type, size);
    let b = Matrix::filled(matrix_type, size);
    (a, b)
}

fn ensure_same_size(op: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.n != b.n {
        return Err(MatrixError::SizeMismatch {
            op,
            left: a.n,
            right: b.n,
        });
    }
    Ok(())
}

impl Matrix {
    /// Поэлементное сложение
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        ensure_same_size("add", self, other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Поэлементное вычитание `self - other`
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        ensure_same_size("subtract", self, other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Обычное умножение за O(n^3)
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        ensure_same_size("multiply", self, other)?;
        let size = self.n;
        log::trace!("multiply: {}x{}", size, size);

        let mut c = Matrix::zero(size);
        for i in 0..size {
            for j in 0..size {
                let mut sum = 0.0f64;
                for k in 0..size {
                    sum += self.data[i * size + k] * other.data[k * size + j];
                }
                c.data[i * size + j] = sum;
            }
        }
        Ok(c)
    }

    /// Сравнивает матрицы с допуском: размеры совпадают и каждая пара
    /// элементов отличается не более чем на `tolerance` (граница включена).
    /// Матрицы разного размера просто не равны. Нарушением считается только
    /// разница строго больше допуска, поэтому NaN и бесконечности не мешают
    /// матрице быть равной самой себе.
    pub fn equals(&self, other: &Matrix, tolerance: f64) -> bool {
        if self.n != other.n {
            return false;
        }
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| !((a - b).abs() > tolerance))
    }

    /// `equals` с допуском по умолчанию
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.equals(other, DEFAULT_TOLERANCE)
    }

    /// Максимальная разница между соответствующими элементами,
    /// `None` для матриц разного размера
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.n != other.n {
            return None;
        }
        let max_diff = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f64, f64::max);
        Some(max_diff)
    }

    /// Поэлементная операция без проверки размеров.
    /// Вызывающий гарантирует `self.n == other.n`.
    pub(crate) fn zip_with<F>(&self, other: &Matrix, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        debug_assert_eq!(self.n, other.n);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix { n: self.n, data }
    }
}

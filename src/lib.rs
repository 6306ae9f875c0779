//! Плотные квадратные матрицы: обычное умножение и умножение по Штрассену

pub mod error;
pub mod matrix;

/// Допуск по умолчанию для сравнения матриц (граница включена)
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Размер базового блока рекурсии Штрассена
pub const STRASSEN_BASE_SIZE: usize = 2;

// Макросы доступны на уровне крейта
#[macro_use]
mod macros {
    /// Литерал матрицы: `matrix![[1.0, 2.0], [3.0, 4.0]]`.
    ///
    /// Паникует, если строки разной длины или их число не совпадает с длиной строки.
    #[macro_export]
    macro_rules! matrix {
        ($([$($x:expr),* $(,)?]),+ $(,)?) => {{
            let grid: Vec<Vec<f64>> = vec![$(vec![$(($x) as f64),*]),+];
            match $crate::matrix::Matrix::from_grid(grid) {
                Ok(m) => m,
                Err(e) => panic!("matrix!: {}", e),
            }
        }};
    }
}

// Реэкспорт основных типов для удобства
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, MatrixType};

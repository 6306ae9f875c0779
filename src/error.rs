//! Ошибки матричных операций

use thiserror::Error;

/// Нарушения контракта при работе с матрицами
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Операнды разного размера
    #[error("{op}: size mismatch ({left}x{left} vs {right}x{right})")]
    SizeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    /// Алгоритм Штрассена требует размер 2^k, k >= 1
    #[error("strassen_multiply: size {n} is not a power of two >= 2")]
    InvalidStrassenSize { n: usize },

    /// Строка сетки не совпадает по длине с числом строк
    #[error("row {row} has {len} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("data length {len} does not match {n}x{n}")]
    DataLength { n: usize, len: usize },

    #[error("array is {rows}x{cols}, expected a square array")]
    NotSquare { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

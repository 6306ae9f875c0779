//! Модуль для работы с матрицами
//! 
//! Предоставляет:
//! - Тип квадратной матрицы и способы ее заполнения
//! - Поэлементные операции, сравнение и обычное умножение
//! - Умножение по алгоритму Штрассена

mod types;
mod convert;
mod display;
pub mod operations;
pub mod strassen;

pub use types::{Matrix, MatrixType};
pub use operations::initialize_matrices;
pub use strassen::strassen_depth;

//! Текстовое представление матрицы для отладки

use std::fmt;

use super::types::Matrix;

/// Строки в квадратных скобках, элементы через два пробела.
/// Без точности значения округляются до целых (половина вверх),
/// `{:.k}` печатает k знаков.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    // `as i64` убирает знак у -0.0
                    None => write!(f, "{}", (value + 0.5).floor() as i64)?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

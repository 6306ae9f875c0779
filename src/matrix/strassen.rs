//! Умножение матриц по Штрассену
//!
//! Матрица N x N делится на четыре квадранта (N/2) x (N/2). Вместо восьми
//! произведений квадрантов считаются семь (P0..P6) от десяти сумм и разностей
//! (S0..S9), после чего результат собирается обратно. Рекурсия идет до
//! блока 2 x 2, где те же формулы применяются к скалярам.

use super::types::Matrix;
use crate::error::{MatrixError, Result};
use crate::STRASSEN_BASE_SIZE;

/// Глубина рекурсии для допустимого размера, `None` для остальных
pub fn strassen_depth(n: usize) -> Option<u32> {
    if n < STRASSEN_BASE_SIZE || !n.is_power_of_two() {
        return None;
    }
    Some(n.trailing_zeros() - STRASSEN_BASE_SIZE.trailing_zeros())
}

impl Matrix {
    /// Произведение `self * other` по алгоритму Штрассена.
    ///
    /// Размеры должны совпадать и быть степенью двойки не меньше 2.
    /// Результат совпадает с [`Matrix::multiply`] с точностью до округления.
    pub fn strassen_multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.n != other.n {
            return Err(MatrixError::SizeMismatch {
                op: "strassen_multiply",
                left: self.n,
                right: other.n,
            });
        }
        let depth = strassen_depth(self.n).ok_or(MatrixError::InvalidStrassenSize { n: self.n })?;
        log::debug!("strassen_multiply: {}x{}, depth {}", self.n, self.n, depth);

        Ok(strassen(self, other))
    }

    /// Квадрант (quadrant_row, quadrant_col) матрицы с четной стороной
    pub(crate) fn quadrant(&self, quadrant_row: usize, quadrant_col: usize) -> Matrix {
        let half = self.n / 2;
        Matrix::from_fn(half, |i, j| {
            let (row, col) = quadrant_offset(half, quadrant_row, quadrant_col, i, j);
            self.data[row * self.n + col]
        })
    }

    /// Собирает матрицу из четырех квадрантов одинакового размера
    pub(crate) fn from_quadrants(quadrants: [[Matrix; 2]; 2]) -> Matrix {
        let half = quadrants[0][0].n;
        let n = half * 2;
        let mut result = Matrix::zero(n);
        for (quadrant_row, row_of_quadrants) in quadrants.iter().enumerate() {
            for (quadrant_col, block) in row_of_quadrants.iter().enumerate() {
                debug_assert_eq!(block.n, half);
                for i in 0..half {
                    for j in 0..half {
                        let (row, col) = quadrant_offset(half, quadrant_row, quadrant_col, i, j);
                        result.data[row * n + col] = block.data[i * half + j];
                    }
                }
            }
        }
        result
    }
}

/// Позиция элемента (i, j) квадранта в полной матрице
fn quadrant_offset(
    half: usize,
    quadrant_row: usize,
    quadrant_col: usize,
    i: usize,
    j: usize,
) -> (usize, usize) {
    (i + quadrant_row * half, j + quadrant_col * half)
}

fn strassen(a: &Matrix, b: &Matrix) -> Matrix {
    if a.n == STRASSEN_BASE_SIZE {
        return strassen_2x2(a, b);
    }
    log::trace!("strassen: splitting {}x{}", a.n, a.n);

    let a00 = a.quadrant(0, 0);
    let a01 = a.quadrant(0, 1);
    let a10 = a.quadrant(1, 0);
    let a11 = a.quadrant(1, 1);
    let b00 = b.quadrant(0, 0);
    let b01 = b.quadrant(0, 1);
    let b10 = b.quadrant(1, 0);
    let b11 = b.quadrant(1, 1);

    // размеры всех квадрантов равны, проверка уже сделана на входе
    let add = |x: &Matrix, y: &Matrix| x.zip_with(y, |p, q| p + q);
    let sub = |x: &Matrix, y: &Matrix| x.zip_with(y, |p, q| p - q);

    let s0 = sub(&b01, &b11);
    let s1 = add(&a00, &a01);
    let s2 = add(&a10, &a11);
    let s3 = sub(&b10, &b00);
    let s4 = add(&a00, &a11);
    let s5 = add(&b00, &b11);
    let s6 = sub(&a01, &a11);
    let s7 = add(&b10, &b11);
    let s8 = sub(&a00, &a10);
    let s9 = add(&b00, &b01);

    let p0 = strassen(&a00, &s0);
    let p1 = strassen(&s1, &b11);
    let p2 = strassen(&s2, &b00);
    let p3 = strassen(&a11, &s3);
    let p4 = strassen(&s4, &s5);
    let p5 = strassen(&s6, &s7);
    let p6 = strassen(&s8, &s9);

    let c00 = add(&sub(&add(&p4, &p3), &p1), &p5);
    let c01 = add(&p0, &p1);
    let c10 = add(&p2, &p3);
    let c11 = sub(&sub(&add(&p4, &p0), &p2), &p6);

    Matrix::from_quadrants([[c00, c01], [c10, c11]])
}

/// Базовый случай: 7 скалярных умножений для блока 2 x 2
fn strassen_2x2(a: &Matrix, b: &Matrix) -> Matrix {
    let (a00, a01, a10, a11) = (a.data[0], a.data[1], a.data[2], a.data[3]);
    let (b00, b01, b10, b11) = (b.data[0], b.data[1], b.data[2], b.data[3]);

    let s0 = b01 - b11;
    let s1 = a00 + a01;
    let s2 = a10 + a11;
    let s3 = b10 - b00;
    let s4 = a00 + a11;
    let s5 = b00 + b11;
    let s6 = a01 - a11;
    let s7 = b10 + b11;
    let s8 = a00 - a10;
    let s9 = b00 + b01;

    let p0 = a00 * s0;
    let p1 = s1 * b11;
    let p2 = s2 * b00;
    let p3 = s3 * a11;
    let p4 = s4 * s5;
    let p5 = s6 * s7;
    let p6 = s8 * s9;

    Matrix {
        n: 2,
        data: vec![
            p4 + p3 - p1 + p5,
            p0 + p1,
            p2 + p3,
            p4 + p0 - p2 - p6,
        ],
    }
}

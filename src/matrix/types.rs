//! Квадратная матрица и связанные типы

use std::ops::Index;

use rand::Rng;

use crate::error::{MatrixError, Result};

/// Способ заполнения матрицы
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixType {
    /// Все элементы равны нулю
    Zeros,
    /// Единичная матрица
    Identity,
    /// Все элементы равны заданному значению
    Constant(f64),
    /// Случайные значения из [0, 1)
    Random,
}

/// Плотная квадратная матрица n x n, элементы хранятся построчно
#[derive(Debug, Clone)]
pub struct Matrix {
    pub(crate) n: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Создает матрицу из сетки строк. Размер равен числу строк,
    /// каждая строка должна содержать ровно столько же элементов.
    pub fn from_grid(grid: Vec<Vec<f64>>) -> Result<Self> {
        let n = grid.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in grid.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// Создает матрицу из плоского вектора (построчно)
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(MatrixError::DataLength { n, len: data.len() });
        }
        Ok(Self { n, data })
    }

    /// Нулевая матрица n x n
    pub fn zero(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0f64; n * n],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zero(n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// Создает матрицу заданного типа
    pub fn filled(matrix_type: MatrixType, n: usize) -> Self {
        match matrix_type {
            MatrixType::Zeros => Self::zero(n),
            MatrixType::Identity => Self::identity(n),
            MatrixType::Constant(value) => Self {
                n,
                data: vec![value; n * n],
            },
            MatrixType::Random => Self::random(n, &mut rand::thread_rng()),
        }
    }

    /// Случайная матрица со значениями из [0, 1) от переданного генератора
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let data = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self { n, data }
    }

    /// Сборка матрицы по функции от индексов (строка, столбец)
    pub(crate) fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Размер стороны матрицы
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.n || col >= self.n {
            return None;
        }
        self.data.get(row * self.n + col).copied()
    }

    /// Элементы в построчном порядке
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Итератор по строкам
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) паникует, у пустой матрицы строк нет
        self.data.chunks(self.n.max(1)).take(self.n)
    }

    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        &self.data[row * self.n + col]
    }
}

//! Интеграционные тесты: создание матриц, поэлементные операции и сравнение

use rand::{rngs::StdRng, SeedableRng};
use strassen_matrix::matrix::initialize_matrices;
use strassen_matrix::{matrix, Matrix, MatrixError, MatrixType, DEFAULT_TOLERANCE};

fn random_triple(n: usize, seed: u64) -> (Matrix, Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    (
        Matrix::random(n, &mut rng),
        Matrix::random(n, &mut rng),
        Matrix::random(n, &mut rng),
    )
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn grid_values_are_exposed_unchanged() -> anyhow::Result<()> {
    let grid = vec![
        vec![1.5, -2.0, 0.0],
        vec![4.0, 5.25, 6.0],
        vec![7.0, 8.0, -9.75],
    ];
    let m = Matrix::from_grid(grid.clone())?;
    assert_eq!(m.size(), 3);
    assert_eq!(m.to_grid(), grid);
    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_eq!(m[(i, j)], value);
        }
    }
    Ok(())
}

#[test]
fn zero_matrix() {
    let z = Matrix::zero(4);
    assert_eq!(z.size(), 4);
    assert!(z.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn ragged_grid_is_rejected() {
    let err = Matrix::from_grid(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
    // число строк 2, поэтому уже первая строка длиной 3 неверна
    assert_eq!(err, MatrixError::RaggedRow { row: 0, len: 3, expected: 2 });
}

#[test]
fn initialized_random_pair_differs() {
    let (a, b) = initialize_matrices(MatrixType::Random, 8);
    assert_eq!(a.size(), 8);
    assert_eq!(b.size(), 8);
    assert!(!a.equals(&b, 0.0));
}

// ---------------------------------------------------------------------------
// Arithmetic laws
// ---------------------------------------------------------------------------

#[test]
fn add_is_commutative_and_associative() -> anyhow::Result<()> {
    for (n, seed) in [(1, 1), (2, 2), (5, 3), (8, 4)] {
        let (a, b, c) = random_triple(n, seed);
        assert!(a.add(&b)?.approx_eq(&b.add(&a)?));
        assert!(a.add(&b)?.add(&c)?.approx_eq(&a.add(&b.add(&c)?)?));
    }
    Ok(())
}

#[test]
fn subtract_self_is_zero() -> anyhow::Result<()> {
    let (a, _, _) = random_triple(8, 17);
    assert!(a.subtract(&a)?.equals(&Matrix::zero(8), 0.0));
    Ok(())
}

#[test]
fn mismatched_add_and_multiply_fail() {
    let a = Matrix::zero(2);
    let b = Matrix::zero(4);
    assert_eq!(
        a.add(&b).unwrap_err(),
        MatrixError::SizeMismatch { op: "add", left: 2, right: 4 }
    );
    assert_eq!(
        b.multiply(&a).unwrap_err(),
        MatrixError::SizeMismatch { op: "multiply", left: 4, right: 2 }
    );
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equals_is_reflexive_and_symmetric() {
    let (a, b, _) = random_triple(4, 23);
    assert!(a.equals(&a, 0.0));
    assert_eq!(a.equals(&b, 0.5), b.equals(&a, 0.5));
    assert_eq!(a.approx_eq(&b), b.approx_eq(&a));
}

#[test]
fn equals_is_reflexive_for_infinite_entries() -> anyhow::Result<()> {
    let a = Matrix::from_vec(2, vec![1.0, f64::INFINITY, 0.0, 1.0])?;
    assert!(a.equals(&a, DEFAULT_TOLERANCE));
    assert!(a.approx_eq(&a.clone()));
    Ok(())
}

#[test]
fn equals_is_false_for_different_sizes() {
    assert!(!Matrix::zero(2).equals(&Matrix::zero(4), f64::INFINITY));
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let a = Matrix::zero(2);
    let at_boundary = matrix![[0.0, 0.0], [DEFAULT_TOLERANCE, 0.0]];
    let past_boundary = matrix![[0.0, 0.0], [DEFAULT_TOLERANCE * 2.0, 0.0]];

    assert!(a.equals(&at_boundary, DEFAULT_TOLERANCE));
    assert!(a.approx_eq(&at_boundary));
    assert!(!a.approx_eq(&past_boundary));

    // точно представимые значения
    let b = matrix![[1.0, 1.0], [1.0, 1.0]];
    let c = matrix![[1.0, 1.0], [1.0, 1.25]];
    assert!(b.equals(&c, 0.25));
    assert!(!b.equals(&c, 0.125));
}

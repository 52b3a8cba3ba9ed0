//! Gaussian elimination over `f64` for the conservation system.

use log::{debug, warn};

use crate::error::ChembalError;
use crate::matrix::StoichiometricMatrix;

/// Pivots whose absolute value is below this are treated as zero
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solves the homogeneous system `matrix * x = 0` of a reaction.
///
/// Every column that does not become a pivot is a free variable and is set
/// to 1; pivot variables follow from back-substitution. The result has one
/// entry per molecule.
///
/// # Errors
/// [`ChembalError::NoSolution`] if the reaction has no elements at all.
pub fn solve(matrix: &StoichiometricMatrix, tolerance: f64) -> Result<Vec<f64>, ChembalError> {
    if matrix.nrows() == 0 || matrix.ncols() == 0 {
        return Err(ChembalError::no_solution("the reaction contains no elements"));
    }
    let rhs = vec![0.0; matrix.nrows()];
    solve_system(matrix.rows(), &rhs, tolerance)
}

/// Solves system of linear equations `rows * x = rhs`.
///
/// Uses Gaussian elimination with partial pivoting to reach row echelon
/// form. Columns without a pivot are free and get the value 1, so an
/// under-determined system still yields one particular solution.
///
/// # Errors
/// * [`ChembalError::WrongMatrixDimensions`] if rows differ in length or `rhs`
///   does not have one entry per row
/// * [`ChembalError::NoSolution`] if the system is inconsistent
///
/// # Example
/// ```
/// use chembal::solver::{solve_system, PIVOT_TOLERANCE};
///
/// // 2x + y - z = 8
/// // -3x - y + 2z = -11
/// // -2x + y + 2z = -3
/// let rows = vec![
///     vec![2.0, 1.0, -1.0],
///     vec![-3.0, -1.0, 2.0],
///     vec![-2.0, 1.0, 2.0],
/// ];
/// let solution = solve_system(&rows, &[8.0, -11.0, -3.0], PIVOT_TOLERANCE).unwrap();
///
/// let expected = [2.0, 3.0, -1.0];
/// for (x, e) in solution.iter().zip(expected) {
///     assert!((x - e).abs() < 1e-9);
/// }
/// ```
pub fn solve_system(rows: &[Vec<f64>], rhs: &[f64], tolerance: f64) -> Result<Vec<f64>, ChembalError> {
    // m - number of rows, n - number of columns
    let m = rows.len();
    if rhs.len() != m {
        return Err(ChembalError::WrongMatrixDimensions);
    }
    let n = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != n) {
        return Err(ChembalError::WrongMatrixDimensions);
    }

    // augmented matrix, last column holds the right-hand side
    let mut matrix: Vec<Vec<f64>> = rows
        .iter()
        .zip(rhs)
        .map(|(row, &b)| row.iter().copied().chain(std::iter::once(b)).collect())
        .collect();

    let pivots = gaussian_elimination(&mut matrix, m, n, tolerance);
    let rank = pivots.len();
    debug!("elimination finished: {m} rows, {n} columns, rank {rank}");

    // rows below the rank are all zero on the left, so their right-hand side must be zero too
    if let Some(row) = matrix[rank..].iter().position(|row| row[n].abs() > tolerance) {
        return Err(ChembalError::no_solution(format!(
            "equation {} cannot be satisfied",
            rank + row + 1
        )));
    }

    let mut solution = vec![0.0; n];
    let mut is_pivot = vec![false; n];
    for &col in &pivots {
        is_pivot[col] = true;
    }
    let free_count = is_pivot.iter().filter(|p| !**p).count();
    if free_count > 1 {
        warn!("{free_count} free variables, each is set to 1; the result may not be the minimal balance");
    }
    for (x, pivot) in solution.iter_mut().zip(&is_pivot) {
        if !pivot {
            *x = 1.0;
        }
    }

    back_substitution(&matrix, &pivots, &mut solution);
    Ok(solution)
}

/// Performs Gaussian elimination on an augmented matrix (additional column stores the right-hand side)
///
/// The matrix is brought to row echelon form in place. For every column the
/// row with the largest absolute value is swapped up as pivot; a column
/// whose best candidate is below `tolerance` is skipped.
///
/// # Arguments
/// * `matrix` - augmented matrix, `m` rows of `n + 1` entries
/// * `m` - number of rows
/// * `n` - number of columns (without the last column)
/// * `tolerance` - pivot threshold
///
/// # Returns
/// The pivot column of every row, in row order. Its length is the rank.
pub fn gaussian_elimination(matrix: &mut [Vec<f64>], m: usize, n: usize, tolerance: f64) -> Vec<usize> {
    let mut pivots = Vec::with_capacity(m.min(n));
    let mut row = 0;
    let mut col = 0;
    while row < m && col < n {
        let mut i_max = row;
        for (i, row_n) in matrix.iter().enumerate().take(m).skip(row + 1) {
            if row_n[col].abs() > matrix[i_max][col].abs() {
                i_max = i;
            }
        }

        if matrix[i_max][col].abs() < tolerance {
            col += 1;
            continue;
        }

        matrix.swap(row, i_max);
        for i in (row + 1)..m {
            let f = matrix[i][col] / matrix[row][col];
            matrix[i][col] = 0.0;
            for j in (col + 1)..(n + 1) {
                let sub = f * matrix[row][j];
                matrix[i][j] -= sub;
            }
        }

        pivots.push(col);
        row += 1;
        col += 1;
    }
    pivots
}

/// Resolves pivot variables from the bottom pivot row up.
///
/// Free variables must already be set in `solution`.
fn back_substitution(matrix: &[Vec<f64>], pivots: &[usize], solution: &mut [f64]) {
    let n = solution.len();
    for (r, &p) in pivots.iter().enumerate().rev() {
        let row = &matrix[r];
        let sum: f64 = ((p + 1)..n).map(|c| row[c] * solution[c]).sum();
        solution[p] = (row[n] - sum) / row[p];
    }
}

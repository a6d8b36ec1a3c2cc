//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};

/// A dense 2D matrix of floating-point values (row-major storage).
///
/// Matrices are immutable value-like objects: every transform allocates a
/// fresh result and never mutates its input, so shapes are fixed for the
/// lifetime of an instance.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidShape {
                reason: format!("dimensions must be at least 1, got {rows}x{cols}"),
            });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::InvalidData {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a copy of a row.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vec<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        self.data[start..end].to_vec()
    }

    /// Returns a copy of a column.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates a matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, the first row is empty, or any
    /// row has a different length from the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrizError::InvalidShape {
                reason: "nested rows must contain at least one non-empty row".to_string(),
            });
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(MatrizError::InvalidShape {
                    reason: format!(
                        "ragged rows: expected {n_cols} columns, got {}",
                        row.len()
                    ),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Applies `f` to every cell and returns the result as a new matrix.
    ///
    /// The callback receives (value, row, col) and returns the new value
    /// for that cell. Cells are visited in row-major order (row 0..R, and
    /// within each row, column 0..C); the input is never mutated.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize, usize) -> f64,
    {
        let mut out = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[i * self.cols + j] = f(self.get(i, j), i, j);
            }
        }
        out
    }

    /// Reduces the matrix to a single value.
    ///
    /// The callback receives (accumulator, value, row, col) and returns the
    /// next accumulator. Traversal is strict, single-pass, and row-major,
    /// identical to [`Matrix::map`]; every cell is visited exactly once.
    #[must_use]
    pub fn fold<F>(&self, init: f64, f: F) -> f64
    where
        F: Fn(f64, f64, usize, usize) -> f64,
    {
        let mut accumulator = init;
        for i in 0..self.rows {
            for j in 0..self.cols {
                accumulator = f(accumulator, self.get(i, j), i, j);
            }
        }
        accumulator
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::zeros(self.cols, self.rows).map(|_, i, j| self.get(j, i))
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|v, _, _| v * scalar)
    }

    /// Divides each element by a scalar.
    ///
    /// Division by zero is not an error: it follows IEEE semantics and
    /// yields infinities or NaN per cell.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Self {
        self.map(|v, _, _| v / scalar)
    }

    /// Adds a scalar to each element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        self.map(|v, _, _| v + scalar)
    }

    /// Subtracts a scalar from each element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f64) -> Self {
        self.map(|v, _, _| v - scalar)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(self.map(|v, i, j| v + other.get(i, j)))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(self.map(|v, i, j| v - other.get(i, j)))
    }

    /// Hadamard (element-wise) product with another matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(self.map(|v, i, j| v * other.get(i, j)))
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner dimensions disagree.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                "lhs columns",
                self.cols,
                other.rows,
            ));
        }
        Ok(Self::zeros(self.rows, other.cols).map(|_, i, j| {
            (0..self.cols).map(|k| self.get(i, k) * other.get(k, j)).sum()
        }))
    }

    /// Returns the sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.fold(0.0, |accumulator, v, _, _| accumulator + v)
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// This is the naive recursive expansion: exponential in the dimension
    /// and not numerically robust, with recursion depth equal to the
    /// dimension. Suitable for small matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn det(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_cofactor())
    }

    // Minors of a square matrix stay square, so the recursion skips the
    // shape check done by `det`.
    fn det_cofactor(&self) -> f64 {
        if self.rows == 1 {
            return self.get(0, 0);
        }

        let mut det = 0.0;
        for n in 0..self.cols {
            // Exact integer parity: even column -> +1, odd -> -1.
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.get(0, n) * self.minor(0, n).det_cofactor();
        }
        det
    }

    /// Returns the minor formed by deleting `row` and `col`, preserving the
    /// relative order of the remaining cells.
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.get(i, j));
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;

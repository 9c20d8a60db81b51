//! Data structures like matrices.

use num_traits::Float;
use std::slice::{Chunks, ChunksMut};

/// A rectangular numeric matrix, stored as a flat row-major vector.
///
/// Used for the input data (rows = samples), for the SOM's per-feature
/// weight planes, and for transient neighborhood fields.
pub struct Matrix<T>
where
    T: Float,
{
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Float,
{
    /// Creates an empty matrix with the given number of columns and zero rows.
    pub fn empty(ncols: usize) -> Self {
        Matrix {
            nrows: 0,
            ncols,
            data: vec![],
        }
    }

    /// Creates a matrix of the given shape, filled with a value.
    pub fn filled(nrows: usize, ncols: usize, fill: T) -> Self {
        Matrix {
            nrows,
            ncols,
            data: vec![fill; nrows * ncols],
        }
    }

    /// Creates a matrix from a slice of rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        assert!(!rows.is_empty());
        Matrix {
            nrows: rows.len(),
            ncols: rows[0].len(),
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows in the matrix.
    pub fn nrows(&self) -> usize {
        self.nrows
    }
    /// Number of columns in the matrix.
    pub fn ncols(&self) -> usize {
        self.ncols
    }
    /// The shape as (rows, columns).
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
    /// A reference to the raw data: a flat vector of values in row-first order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Appends a row to the end of the matrix, from a slice.
    pub fn push_row(&mut self, row: &[T]) {
        assert_eq!(row.len(), self.ncols);
        self.data.extend_from_slice(row);
        self.nrows += 1;
    }

    /// Returns a reference to the value at (row, column).
    pub fn get(&self, row: usize, col: usize) -> &T {
        let idx = self.index(row, col);
        &self.data[idx]
    }
    /// Returns a mutable reference to the value at (row, column).
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.index(row, col);
        &mut self.data[idx]
    }
    /// Sets the value at (row, column), consuming the value.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.data[idx] = value
    }

    /// Returns a row as a slice reference.
    pub fn get_row(&self, row: usize) -> &[T] {
        let idx = self.index(row, 0);
        &self.data[idx..idx + self.ncols]
    }

    /// Returns the raw data index for (row, col).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.ncols + col
    }

    /// An iterator over rows.
    pub fn iter_rows(&self) -> Chunks<T> {
        self.data.chunks(self.ncols)
    }
    /// A mutable iterator over rows.
    pub fn iter_rows_mut(&mut self) -> ChunksMut<T> {
        self.data.chunks_mut(self.ncols)
    }
}

#[cfg(test)]
mod test {
    use crate::data::Matrix;

    #[test]
    fn create_matrix() {
        let m = Matrix::<f64>::filled(100, 4, 0.0);

        assert_eq!(m.nrows, 100);
        assert_eq!(m.ncols, 4);
        assert_eq!(m.data.len(), 400);
    }

    #[test]
    fn create_from_rows() {
        let rows = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![2.0, 3.0, 4.0, 5.0],
            vec![3.0, 4.0, 5.0, 6.0],
        ];
        let m = Matrix::<f64>::from_rows(&rows);

        assert_eq!(m.dims(), (3, 4));
        assert_eq!(m.get(1, 1), &3.0);
    }

    #[test]
    fn add_rows() {
        let mut m = Matrix::<f64>::empty(4);

        m.push_row(&[1.0, 2.0, 3.0, 4.0]);
        m.push_row(&[2.0, 3.0, 4.0, 5.0]);
        m.push_row(&[3.0, 4.0, 5.0, 6.0]);

        assert_eq!(m.nrows, 3);
        assert_eq!(m.data.len(), 12);
        assert_eq!(m.get_row(1), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.get(1, 2), &4.0);
    }

    #[test]
    fn iter_rows() {
        let rows = 10;
        let mut m = Matrix::<f64>::empty(4);

        for _i in 0..rows {
            m.push_row(&[1.0, 2.0, 3.0, 4.0]);
        }

        assert_eq!(m.iter_rows().count(), rows);
    }

    #[test]
    fn mutate_in_place() {
        let mut m = Matrix::<f64>::filled(2, 2, 1.0);
        m.set(0, 1, 3.0);
        *m.get_mut(1, 0) = 5.0;

        assert_eq!(m.get(0, 1), &3.0);
        assert_eq!(m.get(1, 0), &5.0);
        assert_eq!(m.get(0, 0), &1.0);
    }
}

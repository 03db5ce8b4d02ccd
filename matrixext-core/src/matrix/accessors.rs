use crate::matrix::Matrix;
use crate::vector::Vector;

impl<T> Matrix<T> {
    /// Returns the element at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.cols {
            self.data.get(row * self.cols + column)
        } else {
            None
        }
    }

    /// Mutable variant of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows && column < self.cols {
            self.data.get_mut(row * self.cols + column)
        } else {
            None
        }
    }

    /// Borrows row `index` as a slice.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index < self.rows {
            Some(&self.data[index * self.cols..(index + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Borrows the row-major element buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> Matrix<T> {
    /// Copies column `index` out of the matrix.
    pub fn column(&self, index: usize) -> Option<Vec<T>> {
        if index < self.cols {
            Some(self.data.iter().skip(index).step_by(self.cols).copied().collect())
        } else {
            None
        }
    }

    pub fn row_vectors(&self) -> Vec<Vector<T>> {
        self.rows_iter().map(|row| Vector::new(row.to_vec())).collect()
    }

    pub fn column_vectors(&self) -> Vec<Vector<T>> {
        (0..self.cols)
            .filter_map(|j| self.column(j))
            .map(Vector::new)
            .collect()
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(<[T]>::to_vec).collect()
    }
}

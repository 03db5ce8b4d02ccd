// src/matrix/create.rs

use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::vector::Vector;

impl<T: Element> Matrix<T> {
    /// Builds a `rows x cols` matrix by calling `f(row, column)` for every element.
    pub fn build<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { data, rows, cols }
    }

    /// Creates a new matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::build(rows, cols, |_, _| T::zero())
    }

    /// Alias of [`Matrix::zeros`].
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self::zeros(rows, cols)
    }

    /// Creates a new matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::build(rows, cols, |_, _| T::one())
    }

    /// Creates a new matrix filled with `value`.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Matrix { data: vec![value; rows * cols], rows, cols }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::build(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Creates a `1xN` matrix holding the vector's elements.
    pub fn row_vector(vector: &Vector<T>) -> Self {
        Matrix { data: vector.as_slice().to_vec(), rows: 1, cols: vector.len() }
    }

    /// Creates an `Nx1` matrix holding the vector's elements.
    pub fn column_vector(vector: &Vector<T>) -> Self {
        Matrix { data: vector.as_slice().to_vec(), rows: vector.len(), cols: 1 }
    }
}

#[cfg(feature = "random")]
mod random {
    use crate::matrix::Matrix;
    use crate::ops::traits::Element;
    use rand::distributions::Standard;
    use rand::Rng;
    use rand_distr::{Distribution, StandardNormal};

    impl<T: Element> Matrix<T> {
        /// Creates a matrix sampled from rand's `Standard` distribution
        /// (uniform in `[0, 1)` for floats) using the thread-local RNG.
        pub fn rand(rows: usize, cols: usize) -> Self
        where
            Standard: Distribution<T>,
        {
            Self::rand_with_rng(rows, cols, &mut rand::thread_rng())
        }

        pub fn rand_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self
        where
            Standard: Distribution<T>,
        {
            Self::build(rows, cols, |_, _| rng.gen::<T>())
        }

        /// Creates a matrix of standard normal samples using the thread-local RNG.
        pub fn randn(rows: usize, cols: usize) -> Self
        where
            StandardNormal: Distribution<T>,
        {
            Self::randn_with_rng(rows, cols, &mut rand::thread_rng())
        }

        pub fn randn_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self
        where
            StandardNormal: Distribution<T>,
        {
            Self::build(rows, cols, |_, _| StandardNormal.sample(&mut *rng))
        }
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;

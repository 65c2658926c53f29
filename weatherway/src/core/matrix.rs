use std::ops::{Index, IndexMut};

/// Square matrix stored in a single row-major buffer.
///
/// The matrix only ever grows, one row and one column at a time, mirroring the
/// append-only vertex catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    cells: Vec<T>,
    dim: usize,
}

pub fn index(row: usize, col: usize, dim: usize) -> usize {
    row * dim + col
}

pub fn coords(index: usize, dim: usize) -> (usize, usize) {
    (index / dim, index % dim)
}

impl<T> Matrix<T> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            dim: 0,
        }
    }

    /// Creates a `dim`×`dim` matrix with `value` everywhere except the
    /// diagonal, which is set to `diagonal`.
    pub fn filled(dim: usize, value: T, diagonal: T) -> Self
    where
        T: Clone,
    {
        let mut cells = vec![value; dim * dim];
        for i in 0..dim {
            cells[index(i, i, dim)] = diagonal.clone();
        }

        Self { cells, dim }
    }

    /// Builds the matrix cell by cell.
    pub fn from_fn<F>(dim: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cells = (0..dim * dim)
            .map(|i| {
                let (row, col) = coords(i, dim);
                f(row, col)
            })
            .collect();

        Self { cells, dim }
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            self.cells.get(index(row, col, self.dim))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.dim && col < self.dim {
            self.cells.get_mut(index(row, col, self.dim))
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = index(row, 0, self.dim);
        &self.cells[start..start + self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.dim).map(move |row| self.row(row))
    }

    /// Iterates over all cells together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (coords(i, self.dim), value))
    }

    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            cells: self.cells.iter().map(&mut f).collect(),
            dim: self.dim,
        }
    }

    /// Adds one row and one column. New cells get `value`, except the new
    /// diagonal cell which gets `diagonal`.
    pub fn grow(&mut self, value: T, diagonal: T)
    where
        T: Clone,
    {
        let prev_dim = self.dim;
        let dim = prev_dim + 1;
        let mut next = Vec::with_capacity(dim * dim);

        for (i, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            next.push(cell);

            // Are we on the right edge of the original square?
            if (i + 1) % prev_dim == 0 {
                next.push(value.clone());
            }
        }

        // The bottom row.
        next.resize(dim * dim - 1, value);
        next.push(diagonal);

        self.cells = next;
        self.dim = dim;
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.dim && col < self.dim,
            "matrix index ({row}, {col}) out of bounds for dimension {}",
            self.dim
        );
        &self.cells[index(row, col, self.dim)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.dim && col < self.dim,
            "matrix index ({row}, {col}) out of bounds for dimension {}",
            self.dim
        );
        &mut self.cells[index(row, col, self.dim)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_keeps_existing_cells() {
        let mut m = Matrix::from_fn(2, |i, j| (i * 10 + j) as i32);
        m.grow(-1, 0);

        assert_eq!(m.dim(), 3);
        assert_eq!(m.row(0), &[0, 1, -1]);
        assert_eq!(m.row(1), &[10, 11, -1]);
        assert_eq!(m.row(2), &[-1, -1, 0]);
    }

    #[test]
    fn grow_from_empty() {
        let mut m = Matrix::new();
        m.grow(u32::MAX, 0);
        assert_eq!(m[(0, 0)], 0);

        m.grow(u32::MAX, 0);
        assert_eq!(m.row(0), &[0, u32::MAX]);
        assert_eq!(m.row(1), &[u32::MAX, 0]);
    }

    #[test]
    fn filled_diagonal() {
        let m = Matrix::filled(3, 9, 0);
        for ((i, j), value) in m.iter() {
            assert_eq!(*value, if i == j { 0 } else { 9 });
        }
    }

    #[test]
    fn get_out_of_bounds() {
        let m = Matrix::filled(2, 1, 0);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(1, 1), Some(&0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Matrix::filled(2, 1, 0);
        let _ = m[(0, 2)];
    }
}

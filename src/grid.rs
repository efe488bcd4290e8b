//! Row-major rectangular grid shared by every pipeline stage.

use crate::Error;

/// A `height` x `width` grid stored as one row-major `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by calling `f(x, y)` for every cell, y outer and x inner.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build a grid from explicit rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);

        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(Error::RaggedGrid {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Rows from top to bottom. A zero-width grid still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Apply `f` to every cell, producing a fresh grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows[0], &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(rows[1], &[(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(grid.get(1, 1), Some(&'d'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn map_keeps_shape() {
        let grid = Grid::from_fn(4, 3, |x, y| x * y);
        let mapped = grid.map(|v| v.to_string());
        assert_eq!((mapped.width(), mapped.height()), (4, 3));
        assert_eq!(mapped.get(3, 2).map(String::as_str), Some("6"));
    }

    #[test]
    fn zero_width_grid_still_has_rows() {
        let grid: Grid<u8> = Grid::from_fn(0, 2, |_, _| 0);
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.rows().all(<[u8]>::is_empty));
    }
}

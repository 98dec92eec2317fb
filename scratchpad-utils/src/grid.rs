use std::fmt;

use crate::{Error, Result};

/// Fixed-size numeric types a [`Grid`] can hold.
pub trait Element: Copy + fmt::Debug {
    const TYPE_NAME: &'static str;

    fn byte_size() -> usize {
        std::mem::size_of::<Self>()
    }
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const TYPE_NAME: &'static str = stringify!($t);
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Immutable rectangular numeric array, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Element> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T: Element> Grid<T> {
    /// Builds a 2-D grid from nested rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyGrid),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(Error::InvalidShape { row, expected, found });
        }

        let shape = vec![rows.len(), expected];
        let data = rows.into_iter().flatten().collect();
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn element_byte_size(&self) -> usize {
        T::byte_size()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if self.ndim() != 2 || row >= self.shape[0] || col >= self.shape[1] {
            return None;
        }
        self.data.get(row * self.shape[1] + col).copied()
    }

    pub fn report(&self) -> ShapeReport {
        let axes = self
            .shape
            .iter()
            .enumerate()
            .map(|(index, &length)| Axis { index, length })
            .collect();
        log::debug!("reporting shape {:?} of {} grid", self.shape, T::TYPE_NAME);
        ShapeReport {
            element_type: T::TYPE_NAME,
            element_byte_size: self.element_byte_size(),
            axes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub index: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeReport {
    pub element_type: &'static str,
    pub element_byte_size: usize,
    pub axes: Vec<Axis>,
}

impl ShapeReport {
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item size = {} bytes ({})",
            self.element_byte_size, self.element_type
        )?;
        for axis in &self.axes {
            write!(f, "\nDimension = {}, Count = {}", axis.index, axis.length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_two_by_five() {
        let grid = Grid::from_rows(vec![vec![1i64, 2, 3, 4, 5], vec![6, 7, 8, 9, 10]]).unwrap();
        let report = grid.report();

        assert_eq!(report.ndim(), 2);
        assert_eq!(report.element_byte_size, 8);
        assert_eq!(
            report.axes,
            vec![Axis { index: 0, length: 2 }, Axis { index: 1, length: 5 }]
        );
        assert_eq!(grid.get(1, 2), Some(8));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_element_byte_sizes() {
        assert_eq!(Grid::from_rows(vec![vec![1u8]]).unwrap().element_byte_size(), 1);
        assert_eq!(Grid::from_rows(vec![vec![1i32]]).unwrap().element_byte_size(), 4);
        assert_eq!(Grid::from_rows(vec![vec![1.0f64]]).unwrap().element_byte_size(), 8);
    }

    #[test]
    fn test_rows_and_columns_for_many_shapes() {
        for rows in 1..6 {
            for cols in 1..6 {
                let data = vec![vec![0i16; cols]; rows];
                let report = Grid::from_rows(data).unwrap().report();
                assert_eq!(report.ndim(), 2);
                assert_eq!(report.axes[0].length, rows);
                assert_eq!(report.axes[1].length, cols);
            }
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![1i64, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(err, Error::InvalidShape { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(Grid::<i64>::from_rows(vec![]).unwrap_err(), Error::EmptyGrid);
        assert_eq!(Grid::<i64>::from_rows(vec![vec![]]).unwrap_err(), Error::EmptyGrid);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(vec![vec![1i64, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(
            grid.report().to_string(),
            "Item size = 8 bytes (i64)\nDimension = 0, Count = 3\nDimension = 1, Count = 2"
        );
    }
}

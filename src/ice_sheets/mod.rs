//! Scans "ice sheets" -- grids of integer thickness measurements -- for fracture points and for the crack points
//! around them. See:
//!   - [parsing] for the file format & how to load it;
//!   - [fractures] for the analysis & its report.

pub mod parsing;
pub mod fractures;

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};


/// One ice sheet: a `rows` x `cols` grid of measurements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceSheet {
    rows:  usize,
    cols:  usize,
    /// row-major
    cells: Vec<i32>,
}
impl IceSheet {

    /// Builds a sheet out of its rows -- which must all have the same length
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Option<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows:  rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// the measurement at (`row`, `col`), if inside the sheet
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[row * self.cols + col])
    }

    /// iterates over all cells, in row-major order, as `(row, col, value)`
    pub fn cells(&self) -> impl Iterator<Item=(usize, usize, i32)> + '_ {
        self.cells.iter()
            .enumerate()
            .map(|(index, &value)| (index / self.cols, index % self.cols, value))
    }

    /// The up-to-4 orthogonal neighbours of (`row`, `col`) -- left, right, top & bottom, in this order --
    /// as `(row, col, value)`
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item=(usize, usize, i32)> + '_ {
        let left   = col.checked_sub(1).map(|col| (row, col));
        let right  = Some((row, col + 1));
        let top    = row.checked_sub(1).map(|row| (row, col));
        let bottom = Some((row + 1, col));
        [left, right, top, bottom].into_iter()
            .flatten()
            .filter_map(move |(row, col)| self.get(row, col).map(|value| (row, col, value)))
    }
}

/// Errors while loading the ice sheets -- line numbers start at 1
#[derive(Debug)]
pub enum IceSheetsError {
    Io(io::Error),
    /// the input ended before the expected line
    MissingLine { line: usize, expected: &'static str },
    InvalidNumber { line: usize, token: String },
    /// a line had fewer values than required
    MissingValues { line: usize, expected: usize, found: usize },
}
impl Display for IceSheetsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err)                                  => write!(f, "Error reading ice sheets file: {}", err),
            Self::MissingLine { line, expected }           => write!(f, "Ice sheets data ended at line {}, where {} was expected", line, expected),
            Self::InvalidNumber { line, token }            => write!(f, "Invalid number '{}' at line {} of the ice sheets data", token, line),
            Self::MissingValues { line, expected, found }  => write!(f, "Line {} of the ice sheets data has {} value(s), but {} were expected", line, found, expected),
        }
    }
}
impl Error for IceSheetsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
impl From<io::Error> for IceSheetsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [ice_sheets](super) module

    use super::*;

    fn sheet() -> IceSheet {
        IceSheet::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
        ]).expect("rows have the same length")
    }

    #[test]
    fn grid_access() {
        let sheet = sheet();
        assert_eq!((sheet.rows(), sheet.cols()), (2, 3));
        assert_eq!(sheet.get(1, 2), Some(6));
        assert_eq!(sheet.get(2, 0), None);
        assert_eq!(sheet.get(0, 3), None);
        assert_eq!(sheet.cells().nth(4), Some((1, 1, 5)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(IceSheet::from_rows(vec![vec![1, 2], vec![3]]), None);
        let empty = IceSheet::from_rows(vec![]).expect("an empty sheet is valid");
        assert_eq!(empty.cells().count(), 0);
    }

    #[test]
    fn neighbours_are_clipped_at_the_edges() {
        let sheet = sheet();
        let neighbours = |row, col| sheet.neighbours(row, col).map(|(_, _, value)| value).collect::<Vec<_>>();
        assert_eq!(neighbours(0, 0), vec![2, 4]);
        assert_eq!(neighbours(0, 1), vec![1, 3, 5]);
        assert_eq!(neighbours(1, 2), vec![5, 3]);
    }

    #[test]
    fn errors_are_displayable() {
        let err = IceSheetsError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.to_string().contains("no such file"));
        assert!(err.source().is_some());
        let err = IceSheetsError::MissingValues { line: 3, expected: 4, found: 2 };
        assert_eq!(err.to_string(), "Line 3 of the ice sheets data has 2 value(s), but 4 were expected");
        assert!(err.source().is_none());
    }
}

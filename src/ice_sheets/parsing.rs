//! Loads ice sheets from their text representation:
//! ```text
//! 2          <-- number of sheets
//! 2 3        <-- rows & cols of the first sheet, followed by its rows
//! 250 30 7
//! 0 400 50
//! 1 2        <-- second sheet...
//! 300 20
//! ```
//! Values are separated by whitespace; blank lines are skipped; values beyond `cols` on a row are ignored.

use super::{IceSheet, IceSheetsError};
use std::{fs, path::Path, str::FromStr};


/// Reads & parses the ice sheets file at `path`
pub fn read_ice_sheets(path: impl AsRef<Path>) -> Result<Vec<IceSheet>, IceSheetsError> {
    let contents = fs::read_to_string(path)?;
    parse_ice_sheets(&contents)
}

/// Parses the ice sheets out of `contents` -- see [self] for the format
pub fn parse_ice_sheets(contents: &str) -> Result<Vec<IceSheet>, IceSheetsError> {
    let mut lines = Lines::new(contents);
    let (line, header) = lines.next_line("the number of ice sheets")?;
    let [number_of_sheets] = parse_values::<usize, 1>(line, header)?;
    (0..number_of_sheets)
        .map(|_| parse_sheet(&mut lines))
        .collect()
}

fn parse_sheet(lines: &mut Lines) -> Result<IceSheet, IceSheetsError> {
    let (line, dimensions) = lines.next_line("the 'rows cols' line of an ice sheet")?;
    let [rows, cols] = parse_values::<usize, 2>(line, dimensions)?;
    let mut cells = Vec::with_capacity(rows.saturating_mul(cols).min(1 << 20));
    for _ in 0..rows {
        let (line, row) = lines.next_line("a row of ice sheet measurements")?;
        cells.extend(parse_row(line, row, cols)?);
    }
    Ok(IceSheet { rows, cols, cells })
}

fn parse_row(line: usize, text: &str, cols: usize) -> Result<Vec<i32>, IceSheetsError> {
    let row = text.split_whitespace()
        .take(cols)
        .map(|token| parse_token(line, token))
        .collect::<Result<Vec<i32>, _>>()?;
    if row.len() < cols {
        return Err(IceSheetsError::MissingValues { line, expected: cols, found: row.len() });
    }
    Ok(row)
}

/// parses the first `N` values of `text`
fn parse_values<T: FromStr, const N: usize>(line: usize, text: &str) -> Result<[T; N], IceSheetsError> {
    let values = text.split_whitespace()
        .take(N)
        .map(|token| parse_token(line, token))
        .collect::<Result<Vec<T>, _>>()?;
    let found = values.len();
    values.try_into()
        .map_err(|_| IceSheetsError::MissingValues { line, expected: N, found })
}

fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T, IceSheetsError> {
    token.parse::<T>()
        .map_err(|_| IceSheetsError::InvalidNumber { line, token: token.to_owned() })
}

/// Non-blank lines, along with their (1-based) numbers
struct Lines<'a> {
    inner:     std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}
impl<'a> Lines<'a> {
    fn new(contents: &'a str) -> Self {
        Self { inner: contents.lines().enumerate(), last_line: 0 }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), IceSheetsError> {
        for (index, text) in self.inner.by_ref() {
            self.last_line = index + 1;
            if !text.trim().is_empty() {
                return Ok((self.last_line, text));
            }
        }
        Err(IceSheetsError::MissingLine { line: self.last_line + 1, expected })
    }
}

//! Finds the fracture points of each ice sheet & the crack points around them.\
//! A *fracture point* is a cell holding at least [FRACTURE_THRESHOLD] that is evenly divisible by [FRACTURE_DIVISOR];
//! a *crack point* is a non-zero cell, orthogonally adjacent to a fracture point, evenly divisible by [CRACK_DIVISOR].

use super::IceSheet;
use crate::configs::{CRACK_DIVISOR, FRACTURE_DIVISOR, FRACTURE_THRESHOLD};
use std::fmt::{Display, Formatter};


pub fn is_fracture_point(value: i32) -> bool {
    value >= FRACTURE_THRESHOLD && value % FRACTURE_DIVISOR == 0
}

pub fn is_crack_point(value: i32) -> bool {
    value != 0 && value % CRACK_DIVISOR == 0
}

/// the values of the fracture points of `sheet`, in row-major order
pub fn fracture_points(sheet: &IceSheet) -> Vec<i32> {
    sheet.cells()
        .map(|(_, _, value)| value)
        .filter(|&value| is_fracture_point(value))
        .collect()
}

/// The (0-based) index & fracture points count of the sheet with the most fracture points -- the first one, on ties.\
/// `None` if there are no sheets.
pub fn sheet_with_most_fracture_points(fracture_points_per_sheet: &[Vec<i32>]) -> Option<(usize, usize)> {
    fracture_points_per_sheet.iter()
        .map(Vec::len)
        .enumerate()
        .fold(None, |most, (index, count)| match most {
            Some((_, most_count)) if most_count >= count => most,
            _ => Some((index, count)),
        })
}

/// A cell of an ice sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub row:   usize,
    pub col:   usize,
    pub value: i32,
}
impl Display for GridPoint {
    /// the location, as "row x col"
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.row, self.col)
    }
}

/// A fracture point along with the crack points around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractureCracks {
    pub fracture: GridPoint,
    /// left, right, top & bottom -- as available
    pub cracks:   Vec<GridPoint>,
}
impl FractureCracks {
    /// tells if one of the crack points is, itself, a fracture point
    pub fn is_also_crack_point(&self) -> bool {
        self.cracks.iter().any(|crack| is_fracture_point(crack.value))
    }
}

/// The crack points found around the fracture points of one ice sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCracks {
    /// 1-based
    pub sheet_number: usize,
    /// only the fracture points that lead to a crack
    pub fractures:    Vec<FractureCracks>,
}
impl SheetCracks {
    /// how many fracture points have, at least, one crack point around them
    pub fn points_leading_to_crack(&self) -> usize {
        self.fractures.len()
    }
    /// how many of the fracture points leading to a crack have another fracture point among their crack points
    pub fn points_also_crack_points(&self) -> usize {
        self.fractures.iter()
            .filter(|fracture| fracture.is_also_crack_point())
            .count()
    }
    /// `points_also_crack_points / points_leading_to_crack` -- `None` if no fracture point leads to a crack
    pub fn fraction_also_crack_points(&self) -> Option<f64> {
        let leading = self.points_leading_to_crack();
        (leading > 0)
            .then(|| self.points_also_crack_points() as f64 / leading as f64)
    }
}

/// Finds the crack points around each fracture point of `sheet`
pub fn find_crack_points(sheet: &IceSheet, sheet_number: usize) -> SheetCracks {
    let fractures = sheet.cells()
        .filter(|&(_, _, value)| is_fracture_point(value))
        .map(|(row, col, value)| FractureCracks {
            fracture: GridPoint { row, col, value },
            cracks:   sheet.neighbours(row, col)
                          .filter(|&(_, _, value)| is_crack_point(value))
                          .map(|(row, col, value)| GridPoint { row, col, value })
                          .collect(),
        })
        .filter(|fracture| !fracture.cracks.is_empty())
        .collect();
    SheetCracks { sheet_number, fractures }
}

/// Everything found on a set of ice sheets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceSheetsReport {
    /// fracture point values of each sheet
    pub fracture_points: Vec<Vec<i32>>,
    pub cracks:          Vec<SheetCracks>,
}
impl IceSheetsReport {
    pub fn total_fracture_points(&self) -> usize {
        self.fracture_points.iter().map(Vec::len).sum()
    }
    /// See [sheet_with_most_fracture_points()]
    pub fn sheet_with_most_fracture_points(&self) -> Option<(usize, usize)> {
        sheet_with_most_fracture_points(&self.fracture_points)
    }
}
impl Display for IceSheetsReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Part A:\n")?;
        writeln!(f, "Total fracture points: {}", self.total_fracture_points())?;
        if let Some((index, count)) = self.sheet_with_most_fracture_points() {
            writeln!(f, "Ice sheet {} has the most fracture points: {}", index + 1, count)?;
        }
        writeln!(f, "Fracture points:\n")?;
        for (index, points) in self.fracture_points.iter().enumerate() {
            writeln!(f, "Ice Sheet {}:", index + 1)?;
            writeln!(f, "{:?}", points)?;
        }
        writeln!(f, "\nPart B:\n")?;
        for sheet in &self.cracks {
            writeln!(f, "Ice Sheet {}:", sheet.sheet_number)?;
            for fracture in &sheet.fractures {
                for crack in &fracture.cracks {
                    writeln!(f, "Crack point: {}", crack.value)?;
                    writeln!(f, "Crack point location at row x column: {}", crack)?;
                }
            }
            match sheet.fraction_also_crack_points() {
                Some(fraction) => {
                    writeln!(f, "Total number of fracture points that lead to a crack: {}", sheet.points_leading_to_crack())?;
                    writeln!(f, "Total number of fracture points that are also crack points: {}", sheet.points_also_crack_points())?;
                    writeln!(f, "Fraction of fracture points that are also crack points: {:.3}\n", fraction)?;
                },
                None => writeln!(f, "No crack points found for this ice sheet.\n")?,
            }
        }
        Ok(())
    }
}

/// Runs the fracture & crack analysis over all `sheets`
pub fn analyse_ice_sheets(sheets: &[IceSheet]) -> IceSheetsReport {
    IceSheetsReport {
        fracture_points: sheets.iter().map(fracture_points).collect(),
        cracks:          sheets.iter()
                             .enumerate()
                             .map(|(index, sheet)| find_crack_points(sheet, index + 1))
                             .collect(),
    }
}

//! Reports the fracture & crack points of the ice sheets.\
//! Usage: `ice-sheets [path]` -- reads `data/ICESHEETS.TXT` if no path is given.

use sort_search_comparison::{
    analyse_ice_sheets, read_ice_sheets,
    configs::ICE_SHEETS_FILE,
    OUTPUT,
};
use std::process::ExitCode;


fn main() -> ExitCode {
    let path = std::env::args().nth(1)
        .unwrap_or_else(|| ICE_SHEETS_FILE.to_owned());
    match read_ice_sheets(&path) {
        Ok(sheets) => {
            OUTPUT(&format!("{}", analyse_ice_sheets(&sheets)));
            ExitCode::SUCCESS
        },
        Err(err) => {
            OUTPUT(&format!("'{}': {}\n", path, err));
            ExitCode::FAILURE
        },
    }
}

//! Runs the ice sheets analysis over the bundled data file & over files written on the fly

use sort_search_comparison::{
    configs::ICE_SHEETS_FILE,
    ice_sheets::fractures::fracture_points,
    *,
};
use std::path::PathBuf;


fn bundled_data_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ICE_SHEETS_FILE)
}

#[test]
fn bundled_data() {
    let sheets = read_ice_sheets(bundled_data_file()).expect("the bundled data file should be valid");
    assert_eq!(sheets.len(), 3);
    assert_eq!(fracture_points(&sheets[0]), vec![250, 400, 300, 200, 350, 450]);

    let report = analyse_ice_sheets(&sheets);
    assert_eq!(report.total_fracture_points(), 8);
    assert_eq!(report.sheet_with_most_fracture_points(), Some((0, 6)));
    let cracks: Vec<(usize, usize)> = report.cracks.iter()
        .map(|sheet| (sheet.points_leading_to_crack(), sheet.points_also_crack_points()))
        .collect();
    assert_eq!(cracks, vec![(5, 2), (2, 0), (0, 0)]);

    let text = report.to_string();
    assert!(text.contains("Fraction of fracture points that are also crack points: 0.400\n"), "report was:\n{}", text);
    assert!(text.contains("Fraction of fracture points that are also crack points: 0.000\n"), "report was:\n{}", text);
    assert!(text.contains("No crack points found for this ice sheet."), "report was:\n{}", text);
}

#[test]
fn files_written_on_the_fly() {
    let path = std::env::temp_dir().join(format!("ice_sheets_tests_{}.txt", std::process::id()));
    std::fs::write(&path, "1\n2 2\n250 20\n0 300\n").expect("temp dir should be writable");
    let result = read_ice_sheets(&path);
    _ = std::fs::remove_file(&path);
    let sheets = result.expect("file should be valid");
    let report = analyse_ice_sheets(&sheets);
    assert_eq!(report.fracture_points, vec![vec![250, 300]]);
    // 250 -> 20 (right); 300 -> 20 (top). No fracture point is adjacent to another
    assert_eq!(report.cracks[0].points_leading_to_crack(), 2);
    assert_eq!(report.cracks[0].points_also_crack_points(), 0);
}

#[test]
fn malformed_files() {
    let path = std::env::temp_dir().join(format!("ice_sheets_tests_malformed_{}.txt", std::process::id()));
    std::fs::write(&path, "2\n1 1\n250\n").expect("temp dir should be writable");
    let result = read_ice_sheets(&path);
    _ = std::fs::remove_file(&path);
    match result {
        Err(err @ IceSheetsError::MissingLine { .. }) => assert!(err.to_string().contains("line 4"), "message was '{}'", err),
        other => panic!("a MissingLine error was expected, but got {:?}", other),
    }
}

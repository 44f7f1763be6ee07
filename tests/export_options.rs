// tests/export_options.rs
//
// Tests for ExportOptions path logic.
//
use std::path::{Path, PathBuf};
use antropometria::config::options::ExportOptions;

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_is_fixed_workbook_name() {
    let opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert_eq!(norm(&opts.out_path()), norm(Path::new("./ANTROPOMETRIA_ALEMANA.xlsx")));
    assert_eq!(opts.sheet_name, "ANTROPOMETRIA_ALEMANA");
    assert!(!opts.overwrite);
}

#[test]
fn pasted_extension_is_replaced_with_xlsx() {
    let mut opts = ExportOptions::default();
    opts.set_path("out/session/atletas.csv");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/session/atletas.xlsx")));
    assert_eq!(opts.file_stem(), "atletas");
}

#[test]
fn trailing_separator_keeps_default_name() {
    let mut opts = ExportOptions::default();
    opts.set_path("out/2024/");
    assert_eq!(norm(opts.out_dir()), norm(Path::new("out/2024")));
    assert!(opts.out_path().to_string_lossy().ends_with("ANTROPOMETRIA_ALEMANA.xlsx"));
}

#[test]
fn existing_directory_without_separator_is_a_dir() {
    let dir = std::env::temp_dir();
    let mut opts = ExportOptions::default();
    opts.set_path(dir.to_str().unwrap());
    assert_eq!(norm(opts.out_dir()), norm(&dir));
    assert_eq!(opts.file_stem(), "ANTROPOMETRIA_ALEMANA");
}

#[test]
fn bare_file_name_goes_to_current_dir() {
    let mut opts = ExportOptions::default();
    opts.set_path("lunes");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("./lunes.xlsx")));
}

#[test]
fn blank_text_resets_to_default() {
    let mut opts = ExportOptions::default();
    opts.set_path("x/y.xlsx");
    assert!(!opts.is_default_path());
    opts.set_path("   ");
    assert!(opts.is_default_path());
}

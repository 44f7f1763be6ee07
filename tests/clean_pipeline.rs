// tests/clean_pipeline.rs
//
// Cleaning rules on an in-memory table, then the full export → clean round.
use std::fs;
use std::path::PathBuf;

use calamine::{open_workbook_auto, Reader};

use antropometria::clean::{self, Cell, CleanReport, Table};
use antropometria::config::options::ExportOptions;
use antropometria::export::{self, ExportOutcome};
use antropometria::form::FormState;
use antropometria::form::{FieldSource, FormUi};
use antropometria::store::RecordStore;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("antro_clean_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Table {
    Table {
        headers: row(&["ID", "Edad", "PlTr", "PerBrazoRel", "PerBrazoCon", "Test_Abd", "Clasi_ClsAbd", "Nombre"]),
        rows: vec![
            row(&["1", "25", "10", "52", "55", "25", "Regular", "Ana"]),
            row(&["2", "25", "NA", "52", "50", "", "Bueno", "0"]),
            row(&["3", "25", "70", "53", "56", "600", "Excelente", "Eva"]),
            row(&["4", "10", "45", "35", "36", "abc", "x", "Leo"]),
        ],
    }
}

#[test]
fn rules_apply_in_order() {
    let c = clean::clean_table(&sample());
    let num = |r: usize, col: &str| c.cell(r, col).and_then(Cell::number);

    // PlTr: NA and 70 → median(10, 45) = 27.5; then 45 is too high for a 10-year-old
    assert_eq!(num(0, "PlTr"), Some(10.0));
    assert_eq!(num(1, "PlTr"), Some(27.5));
    assert_eq!(num(2, "PlTr"), Some(27.5));
    assert_eq!(num(3, "PlTr"), Some(27.5));

    // flexed < relaxed → dropped, refilled with median(36, 55, 56)
    assert_eq!(num(1, "PerBrazoCon"), Some(55.0));
    assert_eq!(num(3, "PerBrazoRel"), Some(35.0));

    // tests: only row 0 was measured
    for r in 0..4 {
        assert_eq!(num(r, "Test_Abd"), Some(25.0));
    }
    assert_eq!(c.cell(0, "Clasi_ClsAbd"), Some(&Cell::Text("Regular".into())));
    for r in 1..4 {
        assert_eq!(c.cell(r, "Clasi_ClsAbd"), Some(&Cell::Text("No evaluado".into())));
    }

    // placeholders hit text columns too; nothing else is touched
    assert_eq!(c.cell(1, "Nombre"), Some(&Cell::Missing));
    assert_eq!(c.cell(2, "Nombre"), Some(&Cell::Text("Eva".into())));
    assert_eq!(c.cell(3, "ID"), Some(&Cell::Text("4".into())));

    assert_eq!(c.report, CleanReport {
        placeholders: 3,
        unparsable: 1,
        out_of_range: 2,
        arm_incoherent: 1,
        filled_with_median: 7,
        not_evaluated: 3,
        age_out_of_range: 1,
        reclassified: 1,
    });
}

#[test]
fn measured_tests_are_relabeled_by_band() {
    let t = Table {
        headers: row(&[
            "ID", "Sexo", "Test_Abd", "Clasi_ClsAbd", "Test_FlexCLS", "Clasi_ClsFlex", "Test_Cooper", "Clasi_Coop",
        ]),
        rows: vec![
            row(&["1", "F", "19", "", "9", "", "1799", ""]),
            row(&["2", "M", "20", "x", "15", "", "1800", ""]),
            row(&["3", "F", "39", "", "29", "", "2599", ""]),
            row(&["4", "M", "40", "", "45", "", "2600", ""]),
            row(&["5", "", "", "Bueno", "", "", "NA", "Regular"]),
            row(&["6", "", "50", "", "20", "Regular", "3000", ""]),
        ],
    };
    let c = clean::clean_table(&t);
    let label = |r: usize, col: &str| match c.cell(r, col) {
        Some(Cell::Text(t)) => t.clone(),
        other => panic!("row {r} {col}: {other:?}"),
    };

    let bands = ["Deficiente", "Regular", "Bueno", "Excelente"];
    for (r, want) in bands.iter().enumerate() {
        assert_eq!(label(r, "Clasi_ClsAbd"), *want);
        assert_eq!(label(r, "Clasi_ClsFlex"), *want);
        assert_eq!(label(r, "Clasi_Coop"), *want);
    }

    // nothing measured: median-filled values never earn a label
    for k in ["Clasi_ClsAbd", "Clasi_ClsFlex", "Clasi_Coop"] {
        assert_eq!(label(4, k), "No evaluado");
    }

    // no sex, no push-up label; the other two still follow the value
    assert_eq!(label(5, "Clasi_ClsAbd"), "Excelente");
    assert_eq!(label(5, "Clasi_ClsFlex"), "Regular");
    assert_eq!(label(5, "Clasi_Coop"), "Excelente");

    assert_eq!(c.report.not_evaluated, 3);
    assert_eq!(c.report.reclassified, 14);
}

#[test]
fn never_drops_rows_or_columns() {
    let t = sample();
    let c = clean::clean_table(&t);
    assert_eq!(c.headers, t.headers);
    assert_eq!(c.rows.len(), t.rows.len());
    assert!(c.rows.iter().all(|r| r.len() == t.headers.len()));
}

#[test]
fn all_missing_column_stays_missing() {
    let t = Table {
        headers: row(&["ID", "PlAbd"]),
        rows: vec![row(&["1", "-"]), row(&["2", "N/A"])],
    };
    let c = clean::clean_table(&t);
    assert_eq!(c.cell(0, "PlAbd"), Some(&Cell::Missing));
    assert_eq!(c.report.filled_with_median, 0);
}

struct Form(FormState);

impl FieldSource for Form {
    fn value(&self, id: &str) -> Option<String> { self.0.value(id) }
}

impl FormUi for Form {
    fn clear_all_inputs(&mut self) { self.0.clear(); }
    fn notify_user(&mut self, _msg: &str) {}
}

#[test]
fn export_then_clean_file() {
    let dir = tmp_dir("e2e");
    let mut store = RecordStore::new();
    let mut ui = Form(FormState::new());
    for (id, pltr) in [("1", "10"), ("2", ""), ("3", "20")] {
        ui.0.set("ID", id).unwrap();
        ui.0.set("PlTr", pltr).unwrap();
        store.capture(&mut ui);
    }

    let mut opts = ExportOptions::default();
    opts.set_dir(&dir);
    let ExportOutcome::Written(exported) = export::export(&store, &opts, &mut ui).unwrap() else {
        panic!("expected a file");
    };

    let out = clean::default_cleaned_path(&exported);
    assert_eq!(out, dir.join("ANTROPOMETRIA_ALEMANA_CORREGIDA.xlsx"));
    let report = clean::clean_file(&exported, &out).unwrap();
    assert_eq!(report.not_evaluated, 12); // 3 rows × 4 unmeasured tests
    assert_eq!(report.reclassified, 0);

    let mut wb = open_workbook_auto(&out).unwrap();
    let name = wb.sheet_names()[0].clone();
    let range = wb.worksheet_range(&name).unwrap();
    let rows: Vec<Vec<String>> = range.rows().map(|r| r.iter().map(|c| c.to_string()).collect()).collect();

    let col = |n: &str| rows[0].iter().position(|h| h == n).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][col("ID")], "1");
    assert_eq!(rows[2][col("PlTr")], "15");
    assert_eq!(rows[3][col("PlTr")], "20");
    assert_eq!(rows[2][col("Clasi_ClsAbd")], "No evaluado");
}

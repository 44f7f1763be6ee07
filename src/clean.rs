// src/clean.rs
//
// Batch cleaning of an exported workbook. Works column-wise on named columns,
// never drops a row or a column, and leaves unknown columns untouched.
//
// Order matters:
//   placeholders → numeric coercion → fixed ranges → arm coherence
//   → median fill → "No evaluado" → age-adjusted ranges → median refill
//   → labels recomputed for measured tests

use std::error::Error;
use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;

use crate::config::consts::*;
use crate::file;

pub const SKINFOLDS: &[&str] = &["PlTr", "PlSubEsc", "PlCI", "PlSup", "PlAbd", "PlMM", "PlPant"];
pub const PERIMETERS: &[&str] = &[
    "PerBrazoRel", "PerBrazoCon", "PerT", "PerCin", "PerCad", "PerMuslo", "PerPier",
];
pub const TESTS: &[&str] = &["Test_Abd", "Test_FlexCLS", "Test_Salto"];

/// Metres run in 12 minutes. Numeric, but outside the 1–500 test range.
pub const COOPER_TEST: &str = "Test_Cooper";

/// Test column → its classification column.
pub const CLASSIFICATIONS: &[(&str, &str)] = &[
    ("Test_Abd", "Clasi_ClsAbd"),
    ("Test_FlexCLS", "Clasi_ClsFlex"),
    ("Test_Salto", "Clasi_salto"),
    (COOPER_TEST, "Clasi_Coop"),
];

/// Classification labels, lowest band first.
pub const BANDS: [&str; 4] = ["Deficiente", "Regular", "Bueno", "Excelente"];

const AGE_COLUMN: &str = "Edad";
const SEX_COLUMN: &str = "Sexo";
const ARM_RELAXED: &str = "PerBrazoRel";
const ARM_FLEXED: &str = "PerBrazoCon";

/// Plain text table as read from a sheet: header row + data rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn number(&self) -> Option<f64> {
        match self { Cell::Number(v) => Some(*v), _ => None }
    }
    pub fn is_missing(&self) -> bool { matches!(self, Cell::Missing) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub placeholders: usize,
    pub unparsable: usize,
    pub out_of_range: usize,
    pub arm_incoherent: usize,
    pub filled_with_median: usize,
    pub not_evaluated: usize,
    pub age_out_of_range: usize,
    pub reclassified: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cleaned {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub report: CleanReport,
}

impl Cleaned {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let c = self.column(name)?;
        self.rows.get(row)?.get(c)
    }
}

pub fn clean_table(table: &Table) -> Cleaned {
    let mut report = CleanReport::default();
    let width = table.headers.len();
    let col = |name: &str| table.headers.iter().position(|h| h == name);

    let numeric: Vec<usize> = SKINFOLDS.iter().chain(PERIMETERS).chain(TESTS).chain([&COOPER_TEST])
        .filter_map(|&n| col(n))
        .collect();

    // 1 + 2: placeholders, then numeric coercion
    let mut rows: Vec<Vec<Cell>> = table.rows.iter().map(|r| {
        (0..width).map(|c| {
            let raw = r.get(c).map(String::as_str).unwrap_or("");
            if PLACEHOLDER_VALUES.contains(&raw) {
                report.placeholders += 1;
                Cell::Missing
            } else if numeric.contains(&c) {
                match parse_number(raw) {
                    Some(v) => Cell::Number(v),
                    None => { report.unparsable += 1; Cell::Missing }
                }
            } else {
                Cell::Text(s!(raw))
            }
        }).collect()
    }).collect();

    // 3: fixed physiological ranges
    for (names, range) in [(SKINFOLDS, SKINFOLD_RANGE_MM), (PERIMETERS, PERIMETER_RANGE_CM), (TESTS, TEST_RANGE)] {
        for c in names.iter().filter_map(|&n| col(n)) {
            report.out_of_range += drop_outside(&mut rows, c, |_| Some(range));
        }
    }

    // 4: flexed arm can't be smaller than relaxed
    if let (Some(rel), Some(con)) = (col(ARM_RELAXED), col(ARM_FLEXED)) {
        for row in rows.iter_mut() {
            if let (Some(r), Some(f)) = (row[rel].number(), row[con].number()) {
                if f < r {
                    row[con] = Cell::Missing;
                    report.arm_incoherent += 1;
                }
            }
        }
    }

    // Tests missing before any filling
    let untested: Vec<(usize, usize)> = CLASSIFICATIONS.iter()
        .filter_map(|&(t, k)| Some((col(t)?, col(k)?)))
        .collect();
    let untested_mask: Vec<Vec<bool>> = rows.iter()
        .map(|row| untested.iter().map(|&(t, _)| row[t].is_missing()).collect())
        .collect();

    // 5: median fill
    for &c in &numeric {
        report.filled_with_median += fill_median(&mut rows, c);
    }

    // 6: classifications of tests that were never measured
    for (row, mask) in rows.iter_mut().zip(&untested_mask) {
        for (&(_, k), &was_missing) in untested.iter().zip(mask) {
            if was_missing {
                row[k] = Cell::Text(s!(NOT_EVALUATED));
                report.not_evaluated += 1;
            }
        }
    }

    // 7: age-adjusted ranges, then refill
    if let Some(age_col) = col(AGE_COLUMN) {
        let ages: Vec<Option<f64>> = rows.iter().map(|row| match &row[age_col] {
            Cell::Text(t) => parse_number(t),
            other => other.number(),
        }).collect();

        for (names, by_age) in [
            (SKINFOLDS, skinfold_range_for_age as fn(f64) -> (f64, f64)),
            (PERIMETERS, perimeter_range_for_age as fn(f64) -> (f64, f64)),
        ] {
            for c in names.iter().filter_map(|&n| col(n)) {
                report.age_out_of_range += drop_outside(&mut rows, c, |i| ages[i].map(by_age));
            }
        }
        for c in SKINFOLDS.iter().chain(PERIMETERS).filter_map(|&n| col(n)) {
            report.filled_with_median += fill_median(&mut rows, c);
        }
    }

    // 8: labels of measured tests follow the (cleaned) value
    let sex_col = col(SEX_COLUMN);
    for (row, mask) in rows.iter_mut().zip(&untested_mask) {
        let sex = sex_col.and_then(|c| match &row[c] {
            Cell::Text(t) => Some(t.clone()),
            _ => None,
        });
        for (&(t, k), &was_missing) in untested.iter().zip(mask) {
            if was_missing { continue; }
            let label = row[t].number().and_then(|v| classify(&table.headers[t], v, sex.as_deref()));
            if let Some(label) = label {
                row[k] = Cell::Text(s!(label));
                report.reclassified += 1;
            }
        }
    }

    logf!("Clean: rows={} report={:?}", rows.len(), report);

    Cleaned { headers: table.headers.clone(), rows, report }
}

pub fn skinfold_range_for_age(age: f64) -> (f64, f64) {
    if age < 12.0 { (3.0, 40.0) } else if age <= 17.0 { (3.0, 45.0) } else { (5.0, 60.0) }
}

pub fn perimeter_range_for_age(age: f64) -> (f64, f64) {
    if age < 12.0 { (30.0, 120.0) } else if age <= 17.0 { (40.0, 150.0) } else { (50.0, 200.0) }
}

/// Label for `x` given three ascending band limits (each one exclusive).
pub fn band(x: f64, limits: [f64; 3]) -> &'static str {
    BANDS[limits.iter().take_while(|&&l| x >= l).count()]
}

/// Sit-ups.
pub fn classify_abdominals(reps: f64) -> &'static str {
    band(reps, [20.0, 30.0, 40.0])
}

/// Push-ups; limits depend on sex ("F…" is female, anything else male).
pub fn classify_push_ups(reps: f64, sex: &str) -> &'static str {
    let female = sex.trim_start().starts_with(['F', 'f']);
    band(reps, if female { [10.0, 20.0, 30.0] } else { [15.0, 30.0, 45.0] })
}

/// Cooper 12-minute run, metres.
pub fn classify_cooper(metres: f64) -> &'static str {
    band(metres, [1800.0, 2200.0, 2600.0])
}

/// None when the test has no rule, or push-ups without a sex.
fn classify(test: &str, value: f64, sex: Option<&str>) -> Option<&'static str> {
    match test {
        "Test_Abd" => Some(classify_abdominals(value)),
        "Test_FlexCLS" => sex.map(|s| classify_push_ups(value, s)),
        COOPER_TEST => Some(classify_cooper(value)),
        _ => None,
    }
}

/// Accepts "61.5", "61,5" and surrounding spaces.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    t.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Median of the present values; None for an all-missing column.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() { return None; }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 0 { (values[mid - 1] + values[mid]) / 2.0 } else { values[mid] })
}

/// Blank out numbers outside the row's (inclusive) range. Returns how many.
fn drop_outside(rows: &mut [Vec<Cell>], c: usize, range_for: impl Fn(usize) -> Option<(f64, f64)>) -> usize {
    let mut n = 0;
    for (i, row) in rows.iter_mut().enumerate() {
        if let (Some(v), Some((lo, hi))) = (row[c].number(), range_for(i)) {
            if v < lo || v > hi {
                row[c] = Cell::Missing;
                n += 1;
            }
        }
    }
    n
}

fn fill_median(rows: &mut [Vec<Cell>], c: usize) -> usize {
    let mut present: Vec<f64> = rows.iter().filter_map(|r| r[c].number()).collect();
    let Some(m) = median(&mut present) else { return 0 };
    let mut n = 0;
    for row in rows.iter_mut() {
        if row[c].is_missing() {
            row[c] = Cell::Number(m);
            n += 1;
        }
    }
    n
}

/* ---------------- Workbook I/O ---------------- */

/// First worksheet as text: header row + data rows.
pub fn read_table(path: &Path) -> Result<Table, Box<dyn Error>> {
    let mut wb = open_workbook_auto(path)?;
    let name = wb.sheet_names().first().cloned()
        .ok_or_else(|| format!("Workbook has no sheets: {}", path.display()))?;
    let range = wb.worksheet_range(&name)?;

    let mut it = range.rows();
    let headers: Vec<String> = it.next()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let rows = it.map(|r| r.iter().map(|c| c.to_string()).collect()).collect();

    logd!("Clean: read {} (sheet={}, cols={})", path.display(), name, headers.len());
    Ok(Table { headers, rows })
}

pub fn write_cleaned(cleaned: &Cleaned, path: &Path, sheet_name: &str) -> Result<(), Box<dyn Error>> {
    file::ensure_parent(path)?;
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (c, h) in cleaned.headers.iter().enumerate() {
        sheet.write_string(0, c as u16, h)?;
    }
    for (i, row) in cleaned.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Number(v) => { sheet.write_number(r, c as u16, *v)?; }
                Cell::Text(t) => { sheet.write_string(r, c as u16, t)?; }
                Cell::Missing => {}
            }
        }
    }
    workbook.save(path)?;
    Ok(())
}

/// "<dir of input>/ANTROPOMETRIA_ALEMANA_CORREGIDA.xlsx"
pub fn default_cleaned_path(input: &Path) -> PathBuf {
    let dir = input.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new(DEFAULT_OUT_DIR));
    dir.join(format!("{CLEANED_STEM}.{EXPORT_EXT}"))
}

/// Read `input`, clean it, write `output`.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanReport, Box<dyn Error>> {
    logf!("Clean: Begin {} → {}", input.display(), output.display());
    let table = read_table(input)?;
    let cleaned = clean_table(&table);
    write_cleaned(&cleaned, output, SHEET_NAME)?;
    logf!("Clean: OK rows={} → {}", cleaned.rows.len(), output.display());
    Ok(cleaned.report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_even_empty() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn numbers_accept_decimal_comma() {
        assert_eq!(parse_number(" 61,5 "), Some(61.5));
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("doce"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn band_edges_belong_to_the_upper_band() {
        assert_eq!(classify_abdominals(19.9), "Deficiente");
        assert_eq!(classify_abdominals(20.0), "Regular");
        assert_eq!(classify_abdominals(40.0), "Excelente");
        assert_eq!(classify_cooper(2599.0), "Bueno");
        assert_eq!(classify_push_ups(12.0, "F"), "Regular");
        assert_eq!(classify_push_ups(12.0, "M"), "Deficiente");
        assert_eq!(classify("Test_Salto", 100.0, Some("F")), None);
        assert_eq!(classify("Test_FlexCLS", 100.0, None), None);
    }

    #[test]
    fn age_bands() {
        assert_eq!(skinfold_range_for_age(11.0), (3.0, 40.0));
        assert_eq!(skinfold_range_for_age(17.0), (3.0, 45.0));
        assert_eq!(skinfold_range_for_age(30.0), (5.0, 60.0));
        assert_eq!(perimeter_range_for_age(10.0), (30.0, 120.0));
        assert_eq!(perimeter_range_for_age(15.0), (40.0, 150.0));
        assert_eq!(perimeter_range_for_age(18.0), (50.0, 200.0));
    }
}

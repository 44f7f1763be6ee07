// src/export.rs
//
// Records → one-sheet workbook → file. A pure read of the store: the only
// side effects are the written file and, for an empty store, a notice.

use std::error::Error;
use std::path::PathBuf;

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};

use crate::config::consts::{EXPORT_EXT, MSG_NOTHING_TO_EXPORT};
use crate::config::options::ExportOptions;
use crate::file;
use crate::form::FormUi;
use crate::record::Record;
use crate::store::RecordStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing captured yet; no file was written.
    Empty,
    Written(PathBuf),
}

/// Export every captured record to a new workbook on disk.
pub fn export(
    store: &RecordStore,
    opts: &ExportOptions,
    ui: &mut dyn FormUi,
) -> Result<ExportOutcome, Box<dyn Error>> {
    if store.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        ui.notify_user(MSG_NOTHING_TO_EXPORT);
        return Ok(ExportOutcome::Empty);
    }

    let path = if opts.overwrite {
        opts.out_path()
    } else {
        file::resolve_free_filename(opts.out_dir(), &opts.file_stem(), EXPORT_EXT)
    };
    file::ensure_parent(&path)?;

    logf!(
        "Export: Begin rows={}, sheet={}, path={}",
        store.count(),
        opts.sheet_name,
        path.display()
    );

    let mut workbook = build_workbook(store.records(), &opts.sheet_name)?;
    workbook.save(&path)?;

    logf!("Export: OK → {}", path.display());
    Ok(ExportOutcome::Written(path))
}

/// Serialize to xlsx bytes without touching the disk.
pub fn workbook_bytes(records: &[Record], sheet_name: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut workbook = build_workbook(records, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

/// One worksheet: header row, then one row per record in capture order.
///
/// Every data cell carries the text format, so an empty value is stored as a
/// blank cell and an all-empty record still occupies its row.
pub fn build_workbook(records: &[Record], sheet_name: &str) -> Result<Workbook, Box<dyn Error>> {
    let mut workbook = Workbook::new();

    // Fixed stamp: same records, same bytes.
    let props = DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2000, 1, 1)?);
    workbook.set_properties(&props);

    let text = Format::new().set_num_format("@");
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let cols = columns(records);
    write_header(sheet, &cols)?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (c, key) in cols.iter().enumerate() {
            match record.get(key).unwrap_or("") {
                "" => sheet.write_blank(row, c as u16, &text)?,
                value => sheet.write_string_with_format(row, c as u16, value, &text)?,
            };
        }
    }

    Ok(workbook)
}

/// Union of field names across records, first-seen order.
pub fn columns(records: &[Record]) -> Vec<&'static str> {
    let mut cols: Vec<&'static str> = Vec::new();
    for r in records {
        for (key, _) in r.fields() {
            if !cols.contains(&key) {
                cols.push(key);
            }
        }
    }
    cols
}

fn write_header(sheet: &mut Worksheet, cols: &[&str]) -> Result<(), Box<dyn Error>> {
    for (c, name) in cols.iter().enumerate() {
        sheet.write_string(0, c as u16, *name)?;
    }
    Ok(())
}

// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
    pub sheet_name: String,
    /// Replace an existing file instead of saving as "<stem> (N).xlsx".
    pub overwrite: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: OutputPath::default(),
            sheet_name: s!(SHEET_NAME),
            overwrite: false,
        }
    }
}

impl ExportOptions {
    /// Full target path: "<dir>/<stem>.xlsx".
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{stem}.{EXPORT_EXT}"))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn file_stem(&self) -> String {
        self.out_path.file_stem.to_string_lossy().into_owned()
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }

    /// Parse GUI/CLI text into dir + stem. A trailing separator or an
    /// existing directory means "directory only"; the extension is always xlsx.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.out_path.dir = p;
            return;
        }

        if let Some(parent) = p.parent() {
            self.out_path.dir = if parent.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_OUT_DIR)
            } else {
                parent.to_path_buf()
            };
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        // Ignore pasted extension; the workbook is always .xlsx
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(EXPORT_STEM),
        }
    }
}

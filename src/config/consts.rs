// src/config/consts.rs

// Local store (log only; records never persist)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const SHEET_NAME: &str = "ANTROPOMETRIA_ALEMANA";
pub const EXPORT_STEM: &str = "ANTROPOMETRIA_ALEMANA";
pub const EXPORT_EXT: &str = "xlsx";
pub const CLEANED_STEM: &str = "ANTROPOMETRIA_ALEMANA_CORREGIDA";
pub const DEFAULT_OUT_DIR: &str = ".";

// User-facing messages
pub const MSG_SAVED: &str = "✅ Registro guardado correctamente.";
pub const MSG_NOTHING_TO_EXPORT: &str = "No hay registros para exportar.";
pub const COUNTER_LABEL: &str = "Registros guardados";
pub const NOT_EVALUATED: &str = "No evaluado";

// Cleaning: values treated as "not measured"
pub const PLACEHOLDER_VALUES: &[&str] = &["0", "-", "NA", "N/A", "", " "];

// Cleaning: fixed physiological ranges (inclusive)
pub const SKINFOLD_RANGE_MM: (f64, f64) = (3.0, 60.0);
pub const PERIMETER_RANGE_CM: (f64, f64) = (15.0, 200.0);
pub const TEST_RANGE: (f64, f64) = (1.0, 500.0);

// GUI
pub const WINDOW_TITLE: &str = "Antropometría Alemana";

// Exporters: ParsedResume -> downloadable JSON document or plain-text report.
// Filenames are stamped with the export time, not the parse time.

pub mod handlers;
pub mod json;
pub mod report;

pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

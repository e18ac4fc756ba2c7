//! Record file and directory conventions.
//!
//! Pure string functions. These define the canonical on-disk layout of
//! assessment records: one JSON object per file, named
//! `{ScaleType}_{PatientName}_{YYYYMMDD_HHMMSS}.json`.

use jiff::civil::DateTime;

/// Current record directory.
pub const DATA_DIR: &str = "data";

/// Directory older builds wrote records to. Read, never written.
pub const LEGACY_DIR: &str = "results";

pub const RECORD_EXTENSION: &str = "json";

/// Patient segment used when the name is empty.
pub const UNKNOWN_PATIENT_SEGMENT: &str = "Unknown";

pub fn record_file_name(scale_type: &str, patient_name: &str, at: &DateTime) -> String {
    format!(
        "{}_{}_{}.{RECORD_EXTENSION}",
        sanitize_segment(scale_type),
        patient_segment(patient_name),
        file_stamp(at)
    )
}

/// `YYYYMMDD_HHMMSS`.
pub fn file_stamp(at: &DateTime) -> String {
    at.strftime("%Y%m%d_%H%M%S").to_string()
}

/// `YYYY-MM-DDTHH:MM:SS`. Fixed width, so string order is time order.
pub fn assessment_time(at: &DateTime) -> String {
    at.strftime("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Parse an assessment time as written by any build: ISO-8601 with a `T`
/// or space separator (fractional seconds allowed), or a bare file stamp.
pub fn parse_assessment_time(text: &str) -> Option<DateTime> {
    let text = text.trim();
    text.parse::<DateTime>()
        .ok()
        .or_else(|| DateTime::strptime("%Y%m%d_%H%M%S", text).ok())
}

pub fn is_record_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == RECORD_EXTENSION)
}

/// Whether a record file name belongs to the given scale.
pub fn file_matches_scale(file_name: &str, scale_type: &str) -> bool {
    file_name
        .strip_prefix(scale_type)
        .is_some_and(|rest| rest.starts_with('_'))
}

fn patient_segment(name: &str) -> String {
    let cleaned = sanitize_segment(name);
    if cleaned.is_empty() {
        UNKNOWN_PATIENT_SEGMENT.to_string()
    } else {
        cleaned
    }
}

/// Replace characters that cannot appear in a file name on any desktop OS.
fn sanitize_segment(segment: &str) -> String {
    segment
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

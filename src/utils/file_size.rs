const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Size label shown under the picked spreadsheet.
pub fn format_size(bytes: u64) -> String {
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}

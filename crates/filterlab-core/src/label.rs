//! File names for exported results.

/// Name used when no filter has been applied.
pub const ORIGINAL_LABEL: &str = "original";

/// Build the download file name for a result labelled `label`.
///
/// The label is lowercased and spaces become underscores; every other
/// character outside ASCII alphanumerics, `_`, `-` and `.` is dropped.
pub fn export_file_name(label: Option<&str>) -> String {
    let sanitized: String = label
        .unwrap_or(ORIGINAL_LABEL)
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();

    let name = if sanitized.is_empty() {
        ORIGINAL_LABEL
    } else {
        sanitized.as_str()
    };
    format!("filtered_image_{}.png", name)
}

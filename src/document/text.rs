const BOM: char = '\u{feff}';

/// Decode as UTF-8. Invalid sequences become U+FFFD and a leading BOM is
/// dropped; everything else comes back unchanged.
pub fn extract_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// One password per line, taken verbatim.
pub(super) fn parse_line(line: &str) -> Option<(String, u64)> {
    if line.is_empty() {
        None
    } else {
        Some((line.to_string(), 1))
    }
}

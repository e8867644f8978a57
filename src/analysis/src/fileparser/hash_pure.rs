/// One hash per line. Hashes are compared case-insensitively, so they are
/// stored lowercased.
pub(super) fn parse_line(line: &str) -> Option<(String, u64)> {
    let hash = line.trim();
    if hash.is_empty() || hash.contains(char::is_whitespace) {
        return None;
    }
    Some((hash.to_lowercase(), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_multiple_fields() {
        assert_eq!(parse_line("abc def"), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line(" ABC "), Some(("abc".to_string(), 1)));
    }
}

/// `uniq -c` output: optional leading blanks, the count, one separator, the password.
pub(super) fn parse_line(line: &str) -> Option<(String, u64)> {
    let line = line.trim_start();
    let (count, password) = line.split_once(|c: char| c == ' ' || c == '\t')?;
    let count = count.parse::<u64>().ok().filter(|count| *count > 0)?;
    if password.is_empty() {
        return None;
    }
    Some((password.to_string(), count))
}

//! Text primitives shared by the manifest editors and the pruner.
//!
//! Prefix comparisons count characters, not bytes, so a prefix never splits
//! a multi-byte character.

/// First `n` characters of `s`, or all of `s` when it is shorter.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Split content into lines, each keeping its own terminator.
///
/// Concatenating the result reproduces `content` exactly, including `\r\n`
/// endings and a missing final newline.
pub fn split_lines_keep_endings(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Split a line into its body and terminator (`"\n"`, `"\r\n"` or `""`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Split a comma-separated list, dropping empty entries.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_prefix_truncates() {
        assert_eq!(char_prefix("abcdef123.bin", 6), "abcdef");
    }

    #[test]
    fn char_prefix_keeps_short_strings() {
        assert_eq!(char_prefix("app", 6), "app");
        assert_eq!(char_prefix("", 6), "");
    }

    #[test]
    fn char_prefix_counts_characters() {
        assert_eq!(char_prefix("ñandú-v2.js", 5), "ñandú");
    }

    #[test]
    fn split_lines_round_trips() {
        let content = "[package]\r\nname = \"blog\"\n\nlast";
        let lines = split_lines_keep_endings(content);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.concat(), content);
    }

    #[test]
    fn split_lines_of_empty_content_is_empty() {
        assert!(split_lines_keep_endings("").is_empty());
    }

    #[test]
    fn split_line_ending_handles_each_terminator() {
        assert_eq!(split_line_ending("a\r\n"), ("a", "\r\n"));
        assert_eq!(split_line_ending("a\n"), ("a", "\n"));
        assert_eq!(split_line_ending("a"), ("a", ""));
    }

    #[test]
    fn split_csv_drops_empty_entries() {
        assert_eq!(
            split_csv("main.abc123.js,,style.def456.css,"),
            vec!["main.abc123.js", "style.def456.css"]
        );
        assert!(split_csv("").is_empty());
    }
}

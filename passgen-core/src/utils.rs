//! Shared string helpers for code generation.

/// Quote a string as a Go interpreted string literal.
///
/// Backslashes, double quotes and control characters are escaped so that
/// arbitrary descriptions survive the round trip into generated source.
pub fn quote_go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Strip the leading dashes from a flag alias (`--org` -> `org`, `-o` -> `o`).
pub fn strip_flag_prefix(flag: &str) -> &str {
    flag.trim_start_matches('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote_go_string("orgs"), "\"orgs\"");
        assert_eq!(quote_go_string(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote_go_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_go_string(r"C:\tmp"), r#""C:\\tmp""#);
        assert_eq!(quote_go_string("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_strip_flag_prefix() {
        assert_eq!(strip_flag_prefix("--org"), "org");
        assert_eq!(strip_flag_prefix("-o"), "o");
        assert_eq!(strip_flag_prefix("name"), "name");
    }
}

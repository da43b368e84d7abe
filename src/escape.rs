const SPECIAL_CHARS: [char; 24] = [
    '(', ')', '[', ']', '{', '}', '?', '*', '+', '-', '|', '^', '$', '\\', '.', '&', '~', '#',
    ' ', '\t', '\n', '\r', '\x0b', '\x0c',
];

/// Backslash-prefixes every special character in `text`.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_specials() {
        assert_eq!(escape("a.b*c"), r"a\.b\*c");
        assert_eq!(escape("(x|y)"), r"\(x\|y\)");
        assert_eq!(escape("a b"), r"a\ b");
        assert_eq!(escape("\t"), "\\\t");
    }

    #[test]
    fn leaves_plain_text() {
        assert_eq!(escape("abc_123"), "abc_123");
        assert_eq!(escape(""), "");
        assert_eq!(escape("日本"), "日本");
    }
}

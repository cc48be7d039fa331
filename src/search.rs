use crate::engine::ReplaceConfig;

/// True when `needle` is a non-empty prefix of `haystack`.
pub fn starts_with(needle: &str, haystack: &str) -> bool {
    !needle.is_empty() && haystack.starts_with(needle)
}

/// True when `needle` is a non-empty suffix of `haystack`.
pub fn ends_with(needle: &str, haystack: &str) -> bool {
    !needle.is_empty() && haystack.ends_with(needle)
}

/// True when a non-empty `needle` occurs anywhere in `haystack`.
pub fn contains(needle: &str, haystack: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Text before the first `delimiter`, or `None` when it is not found.
pub fn left<'a>(delimiter: &str, input: &'a str) -> Option<&'a str> {
    if delimiter.is_empty() || input.is_empty() {
        return None;
    }
    input.split_once(delimiter).map(|(before, _)| before)
}

/// Text after the first `delimiter`, or `None` when it is not found.
pub fn right<'a>(delimiter: &str, input: &'a str) -> Option<&'a str> {
    if delimiter.is_empty() || input.is_empty() {
        return None;
    }
    input.split_once(delimiter).map(|(_, after)| after)
}

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

pub fn to_upper(input: &str) -> String {
    upper(input)
}

pub fn to_lower(input: &str) -> String {
    lower(input)
}

/// Replaces every non-overlapping occurrence of `needle`, scanning left to right.
/// With `insensitive` the match ignores case but `replacement` is inserted as given.
pub fn replace(needle: &str, replacement: &str, haystack: &str, config: &ReplaceConfig) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    if !config.insensitive {
        return haystack.replace(needle, replacement);
    }

    let needle: Vec<char> = needle.chars().collect();
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;

    while !rest.is_empty() {
        match match_ignore_case(&needle, rest) {
            Some(matched_len) => {
                out.push_str(replacement);
                rest = &rest[matched_len..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }

    out
}

/// Byte length of the prefix of `text` equal to `needle` ignoring case.
fn match_ignore_case(needle: &[char], text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for &n in needle {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(idx, _)| idx))
}

/// Number of characters in `input`; an absent input has length zero.
pub fn length(input: Option<&str>) -> usize {
    input.map_or(0, |s| s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with() {
        assert!(starts_with("foo", "foobar"));
        assert!(!starts_with("foo", "barfoo"));
        assert!(!starts_with("", "foobar"));
        assert!(!starts_with("", ""));
    }

    #[test]
    fn test_ends_with() {
        assert!(!ends_with("foo", "foobar"));
        assert!(ends_with("foo", "barfoo"));
        assert!(!ends_with("", "foobar"));
        assert!(!ends_with("", ""));
    }

    #[test]
    fn test_contains() {
        assert!(contains("foo", "foobar"));
        assert!(contains("foo", "barfoo"));
        assert!(contains("foo", "xfoox"));
        assert!(!contains("moo", "barfoo"));
        assert!(!contains("", "barfoo"));
        assert!(!contains("", ""));
    }

    #[test]
    fn test_left() {
        assert_eq!(left(":", "foo:bar"), Some("foo"));
        assert_eq!(left(":", "one:two:three"), Some("one"));
        assert_eq!(left("x", "foo:bar"), None);
        assert_eq!(left("", ""), None);
        assert_eq!(left(":", ":bar"), Some(""));
    }

    #[test]
    fn test_right() {
        assert_eq!(right(":", "foo:bar"), Some("bar"));
        assert_eq!(right(":", "one:two:three"), Some("two:three"));
        assert_eq!(right("x", "foo:bar"), None);
        assert_eq!(right("", ""), None);
        assert_eq!(right(":", "foo:"), Some(""));
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(upper("foo"), "FOO");
        assert_eq!(lower("FOO"), "foo");
        assert_eq!(to_upper("foo"), "FOO");
        assert_eq!(to_lower("FOO"), "foo");
        assert_eq!(upper("straße"), "STRASSE");
        assert_eq!(lower("ŁÓDŹ"), "łódź");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("bar", "", "foobar", &ReplaceConfig::default()), "foo");
        assert_eq!(replace("bar", "", "fooBAR", &ReplaceConfig::default()), "fooBAR");
        assert_eq!(replace("o", "0", "foo boo", &ReplaceConfig::default()), "f00 b00");
    }

    #[test]
    fn test_replace_insensitive() {
        let config = ReplaceConfig::insensitive();
        assert_eq!(replace("bar", "", "fooBAR", &config), "foo");
        assert_eq!(replace("BAR", "baz", "bar Bar bAr", &config), "baz baz baz");
        assert_eq!(replace("ó", "o", "ÓÓ", &config), "oo");
    }

    #[test]
    fn test_replace_is_non_overlapping() {
        assert_eq!(replace("aa", "b", "aaa", &ReplaceConfig::default()), "ba");
        assert_eq!(replace("aa", "b", "AAA", &ReplaceConfig::insensitive()), "bA");
    }

    #[test]
    fn test_replace_empty_needle() {
        assert_eq!(replace("", "x", "abc", &ReplaceConfig::default()), "abc");
        assert_eq!(replace("", "x", "abc", &ReplaceConfig::insensitive()), "abc");
    }

    #[test]
    fn test_length() {
        assert_eq!(length(Some("foo")), 3);
        assert_eq!(length(Some("Loðbrók")), 7);
        assert_eq!(length(Some("")), 0);
        assert_eq!(length(None), 0);
    }
}

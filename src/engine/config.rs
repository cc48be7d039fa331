// Per-call options for the text operations.
// Every struct has a Default; override single fields with `..Default::default()`.

/// Options for `tokenize` / `split_tokens`
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeConfig {
    /// Token separator (default ' ')
    pub delimiter: char,

    /// Quoting character; delimiters inside a quoted span are kept (default '"')
    pub quote: char,

    /// Treat runs of delimiters as one instead of yielding empty tokens (default false)
    pub collapse_delimiters: bool,

    /// Names to pair positionally with the produced tokens (default None)
    pub keys: Option<Vec<String>>,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            quote: '"',
            collapse_delimiters: false,
            keys: None,
        }
    }
}

impl TokenizeConfig {
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: Some(keys.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Options for `replace`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceConfig {
    /// Match the needle ignoring case (default false)
    pub insensitive: bool,
}

impl ReplaceConfig {
    pub fn insensitive() -> Self {
        Self { insensitive: true }
    }
}

/// Options for `insert`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertConfig {
    /// Opening placeholder delimiter (default "{")
    pub before: String,

    /// Closing placeholder delimiter (default "}")
    pub after: String,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            before: "{".to_string(),
            after: "}".to_string(),
        }
    }
}

impl InsertConfig {
    pub fn with_delimiters(before: &str, after: &str) -> Self {
        Self {
            before: before.to_string(),
            after: after.to_string(),
        }
    }
}

/// Options for `word_wrap`
#[derive(Debug, Clone, PartialEq)]
pub struct WrapConfig {
    /// Maximum line width in characters (default 80)
    pub width: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self { width: 80 }
    }
}

impl WrapConfig {
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }
}

/// Options for `truncate`
#[derive(Debug, Clone, PartialEq)]
pub struct TruncateConfig {
    /// Characters kept before the suffix (default 200)
    pub length: usize,

    /// Appended when the input is cut (default "...")
    pub suffix: String,

    /// Back the cut off to the previous whitespace (default false)
    pub word_safe: bool,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            length: 200,
            suffix: "...".to_string(),
            word_safe: false,
        }
    }
}

impl TruncateConfig {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

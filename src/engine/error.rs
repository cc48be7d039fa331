use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// Raised by `tokenize` when the supplied key list and the produced
    /// tokens cannot be paired one-to-one.
    #[error("Mismatched key count: {keys} keys for {tokens} tokens")]
    MismatchedKeyCount { keys: usize, tokens: usize },
}

pub type Result<T> = std::result::Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_key_count_message() {
        let err = TextError::MismatchedKeyCount { keys: 1, tokens: 3 };
        assert_eq!(err.to_string(), "Mismatched key count: 1 keys for 3 tokens");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(TextError::MismatchedKeyCount { keys: 0, tokens: 2 });
        assert!(err.to_string().contains("0 keys"));
    }
}

pub mod parser;
pub mod token;

pub use parser::split_quoted;
pub use token::{KeyedTokens, Tokens};

use crate::engine::{Result, TextError, TokenizeConfig};

/// Splits `input` into tokens, ignoring `config.keys`.
pub fn split_tokens(input: &str, config: &TokenizeConfig) -> Vec<String> {
    split_quoted(
        input,
        config.delimiter,
        config.quote,
        config.collapse_delimiters,
    )
}

/// Quote-aware split of `input`.
///
/// Without keys the tokens come back as a list in order of appearance. With
/// keys each key is paired with the token at the same position; the counts
/// must match exactly or the call fails with `MismatchedKeyCount`.
pub fn tokenize(input: &str, config: &TokenizeConfig) -> Result<Tokens> {
    let tokens = split_tokens(input, config);

    let Some(keys) = &config.keys else {
        return Ok(Tokens::List(tokens));
    };

    if keys.len() != tokens.len() {
        log::debug!(
            "tokenize: {} keys supplied for {} tokens",
            keys.len(),
            tokens.len()
        );
        return Err(TextError::MismatchedKeyCount {
            keys: keys.len(),
            tokens: tokens.len(),
        });
    }

    let entries = keys.iter().cloned().zip(tokens).collect();
    Ok(Tokens::Keyed(KeyedTokens::new(entries)))
}

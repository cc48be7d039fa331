//! Pure string helpers: ASCII folding and slugs, quote-aware tokenizing,
//! search predicates, placeholder templates, word wrap and truncation.

pub mod ascii;
pub mod engine;
pub mod layout;
pub mod search;
pub mod template;
pub mod tokenize;

pub use ascii::{slug, to_ascii};
pub use engine::{
    InsertConfig, ReplaceConfig, TextError, TokenizeConfig, TruncateConfig, WrapConfig,
};
pub use layout::{truncate, word_wrap};
pub use search::{
    contains, ends_with, left, length, lower, replace, right, starts_with, to_lower, to_upper,
    upper,
};
pub use template::insert;
pub use tokenize::{split_tokens, tokenize, KeyedTokens, Tokens};

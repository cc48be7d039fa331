pub mod config;
pub mod error;

pub use config::{InsertConfig, ReplaceConfig, TokenizeConfig, TruncateConfig, WrapConfig};
pub use error::{Result, TextError};

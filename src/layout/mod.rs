pub mod truncate;
pub mod wrap;

pub use truncate::truncate;
pub use wrap::word_wrap;

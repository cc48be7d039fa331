pub mod slug;
pub mod table;

pub use slug::slug;

/// Replaces every accented letter known to the transliteration table with its
/// ASCII spelling. Anything else passes through untouched.
pub fn to_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match table::lookup(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

use super::to_ascii;

/// URL-safe identifier: lowercase ASCII letters and digits, with each run of
/// anything else collapsed into a single hyphen and no hyphen at either end.
pub fn slug(input: &str) -> String {
    let folded = to_ascii(input);

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

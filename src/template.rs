use std::fmt::Display;

use crate::engine::InsertConfig;

/// Substitutes `before + key + after` placeholders in `template` with the
/// matching values. Unknown placeholders are left as they are.
///
/// The template is scanned once from left to right, so inserted values are
/// never themselves rescanned. When several placeholders match at the same
/// position the longest one wins. With both delimiters empty this is a plain
/// search-and-replace of the bare keys.
pub fn insert<K, V>(template: &str, values: &[(K, V)], config: &InsertConfig) -> String
where
    K: AsRef<str>,
    V: Display,
{
    let mut placeholders: Vec<(String, String)> = values
        .iter()
        .map(|(key, value)| {
            let key: &str = key.as_ref();
            (
                format!("{}{}{}", config.before, key, config.after),
                value.to_string(),
            )
        })
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .collect();
    placeholders.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    if placeholders.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        let hit = placeholders
            .iter()
            .find(|(placeholder, _)| rest.starts_with(placeholder.as_str()));

        match hit {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &rest[placeholder.len()..];
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

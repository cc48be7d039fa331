use crate::engine::TruncateConfig;

/// Cuts `input` down to `config.length` characters and appends the suffix.
/// Inputs that already fit are returned unchanged.
///
/// The cut lands on a character boundary, so exactly `length` characters are
/// kept. With `word_safe` it backs off to the last whitespace instead of
/// splitting a word, unless the kept text has no whitespace at all.
pub fn truncate(input: &str, config: &TruncateConfig) -> String {
    let char_count = input.chars().count();
    if char_count <= config.length {
        return input.to_string();
    }

    let cut = char_cut(input, config.length);
    let mut head = &input[..cut];

    if config.word_safe {
        head = back_off_to_word(input, cut);
    }

    log::debug!(
        "truncated {} chars to {} (word_safe: {})",
        char_count,
        head.chars().count(),
        config.word_safe
    );

    format!("{}{}", head, config.suffix)
}

/// Byte offset of the `length`-th character, or the end of `input`.
fn char_cut(input: &str, length: usize) -> usize {
    input
        .char_indices()
        .nth(length)
        .map_or(input.len(), |(idx, _)| idx)
}

fn back_off_to_word(input: &str, cut: usize) -> &str {
    let hard = &input[..cut];
    let at_boundary = input[cut..].chars().next().map_or(true, char::is_whitespace);

    let soft = if at_boundary {
        hard
    } else {
        match hard.rfind(char::is_whitespace) {
            Some(pos) => &hard[..pos],
            None => hard,
        }
    };

    let soft = soft.trim_end();
    if soft.is_empty() {
        hard
    } else {
        soft
    }
}

use crate::engine::WrapConfig;

/// Greedy word wrap.
///
/// Words are packed onto a line while `line + ' ' + word` still fits in
/// `config.width` characters. Existing newlines are hard breaks. A word wider
/// than the limit gets a line of its own and is never split. Runs of spaces
/// or tabs inside a line collapse to a single space, even on lines that fit.
pub fn word_wrap(input: &str, config: &WrapConfig) -> String {
    let width = config.width.max(1);

    input
        .split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > width {
            log::debug!("word of {} chars exceeds wrap width {}", word_len, width);
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

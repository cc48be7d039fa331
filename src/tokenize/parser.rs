/// Splits `input` on `delimiter`, treating everything between two `quote`
/// characters as part of the current token. Quote characters are dropped.
///
/// Every delimiter outside quotes ends a field, so adjacent delimiters yield
/// empty tokens. With `collapse` set, runs of delimiters count as one and only
/// an explicit empty quoted span (`""`) yields an empty token. Empty input has
/// no tokens. An unterminated quote runs to the end of input.
pub fn split_quoted(input: &str, delimiter: char, quote: char, collapse: bool) -> Vec<String> {
    let mut tokens = Vec::new();
    if input.is_empty() {
        return tokens;
    }

    let mut current = String::new();
    let mut in_quote = false;
    // Set once the current token has seen a quote, so `""` survives collapsing
    let mut quoted = false;

    for c in input.chars() {
        if c == quote {
            in_quote = !in_quote;
            quoted = true;
            continue;
        }

        if c == delimiter && !in_quote {
            if !collapse || !current.is_empty() || quoted {
                tokens.push(std::mem::take(&mut current));
            }
            quoted = false;
            continue;
        }

        current.push(c);
    }

    if in_quote {
        log::debug!("unterminated {:?} quote, token runs to end of input", quote);
    }

    if !collapse || !current.is_empty() || quoted {
        tokens.push(current);
    }

    tokens
}

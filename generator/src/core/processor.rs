//! Completion text clean-up and length capping

/// Open/close pairs that count as wrapping quotes
const QUOTE_PAIRS: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
    ('`', '`'),
];

/// Marker appended to capped content
pub const ELLIPSIS: &str = "...";

/// Strip surrounding whitespace and wrapping quotes.
///
/// A quote is only removed together with its matching partner at the other
/// end, so a reply that merely starts or ends with a quoted phrase is kept
/// as is. Nested wrappers (`"'...'"`) are peeled one layer at a time.
pub fn postprocess(raw: &str) -> String {
    let mut current = raw.trim();
    while let Some(inner) = unwrap_quotes(current) {
        current = inner.trim();
    }
    current.to_string()
}

fn unwrap_quotes(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    QUOTE_PAIRS
        .iter()
        .any(|&(open, close)| first == open && last == close)
        .then(|| &text[first.len_utf8()..text.len() - last.len_utf8()])
}

/// Limit content to `max_words` whitespace-delimited tokens.
///
/// Over-long content is rebuilt from its first `max_words` tokens joined by
/// single spaces, followed by [`ELLIPSIS`]. Content within the limit is
/// returned unchanged, line breaks included.
pub fn cap_words(content: &str, max_words: usize) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() <= max_words {
        return content.to_string();
    }
    format!("{}{}", words[..max_words].join(" "), ELLIPSIS)
}

/// Word count used for the cap
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

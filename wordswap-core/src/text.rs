use regex::Regex;
use std::sync::OnceLock;

fn non_letters_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII only: the lexicon service is English and queries must match `^[a-z]+$`.
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z]").expect("valid non-letter regex"))
}

fn lowercase_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+$").expect("valid word regex"))
}

pub fn strip_non_letters(text: &str) -> String {
    non_letters_re().replace_all(text, "").to_string()
}

/// Normalizes free-form user input into a query candidate.
///
/// Trims, lowercases, then drops every non-letter. The result may be empty;
/// `WordQuery::parse` is the place that rejects that.
pub fn normalize_query(input: &str) -> String {
    strip_non_letters(&input.trim().to_lowercase())
}

/// Returns the alphabetic token immediately before `cursor_offset`.
///
/// `cursor_offset` counts characters, not bytes, and is clamped to the text
/// length. Only spaces and newlines separate tokens; punctuation attached to
/// the token is stripped afterwards.
pub fn extract_word_before_cursor(text: &str, cursor_offset: usize) -> String {
    let end = text
        .char_indices()
        .nth(cursor_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let before = text[..end].trim();

    let candidate = match before.rfind([' ', '\n']) {
        Some(i) => &before[i + 1..],
        None => before,
    };

    strip_non_letters(candidate).to_lowercase()
}

/// First word of a (possibly multi-word) selection, letters only.
///
/// Case is preserved; the search path lowercases it.
pub fn first_selected_word(selection: &str) -> Option<String> {
    let first = selection.split_whitespace().next()?;
    let word = strip_non_letters(first);
    (!word.is_empty()).then_some(word)
}

pub fn is_detectable_word(word: &str, min_len: usize) -> bool {
    word.len() >= min_len && lowercase_word_re().is_match(word)
}

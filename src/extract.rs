//! Complex-term selection from quote text.

/// A single token at least this long is taken as the vocabulary word.
const COMPLEX_WORD_LEN: usize = 7;
/// Two adjacent tokens joined by a space at least this long form a phrase.
const COMPLEX_PHRASE_LEN: usize = 10;

/// Pick the vocabulary word or phrase from `text`.
///
/// Tokens are runs of ASCII letters. The first token of [`COMPLEX_WORD_LEN`]
/// or more wins. Without one, the first adjacent pair whose space-joined
/// length reaches [`COMPLEX_PHRASE_LEN`] is used. Otherwise the first token,
/// or `""` for text without letters. Ties go to the leftmost candidate.
pub fn extract_phrase(text: &str) -> String {
    let tokens: Vec<&str> = text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(word) = tokens.iter().find(|t| t.len() >= COMPLEX_WORD_LEN) {
        return word.to_string();
    }

    // ASCII tokens, so byte length is character length
    if let Some(pair) = tokens
        .windows(2)
        .find(|pair| pair[0].len() + 1 + pair[1].len() >= COMPLEX_PHRASE_LEN)
    {
        return format!("{} {}", pair[0], pair[1]);
    }

    tokens.first().map(|t| t.to_string()).unwrap_or_default()
}

/// First whitespace-delimited word of a phrase; the dictionary only takes single words.
pub fn first_word(phrase: &str) -> &str {
    phrase.split_whitespace().next().unwrap_or("")
}

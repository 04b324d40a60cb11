//! Tokenization and raw counts.
//!
//! - words: maximal runs of non-whitespace (no empty tokens)
//! - sentences: fragments between `.`, `!`, `?` delimiters, counted
//!   inclusively (delimiters + 1, so the count is always at least 1)
//! - characters: every char except the plain space `' '`

/// Characters that end a sentence.
pub const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Split `text` into word tokens.
///
/// Tokens are separated by any Unicode whitespace; consecutive separators and
/// leading/trailing whitespace produce no empty tokens.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count sentence fragments in `text`.
///
/// Every delimiter opens a new fragment, so `"Cat."` counts 2 (the sentence
/// plus the empty trailing fragment) and text with no delimiter counts 1.
pub fn count_sentences(text: &str) -> usize {
    text.split(SENTENCE_DELIMITERS).count()
}

/// Count characters in `text`, excluding only the plain space `' '`.
///
/// Tabs and all punctuation count; line breaks never appear here because the
/// loader strips them.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(word_tokens("foo\tbar  baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(word_tokens("Cat."), vec!["Cat."]);
    }

    #[test]
    fn words_ignore_leading_and_trailing_whitespace() {
        assert_eq!(word_tokens("  hi there "), vec!["hi", "there"]);
    }

    #[test]
    fn whitespace_only_text_has_no_words() {
        assert!(word_tokens("   ").is_empty());
        assert!(word_tokens("").is_empty());
    }

    #[test]
    fn sentences_count_is_delimiters_plus_one() {
        assert_eq!(count_sentences("Cat."), 2);
        assert_eq!(count_sentences("The cat sat. It was happy!"), 3);
        assert_eq!(count_sentences("Hi!!"), 3);
    }

    #[test]
    fn text_without_delimiters_is_one_sentence() {
        assert_eq!(count_sentences("no end in sight"), 1);
        assert_eq!(count_sentences(""), 1);
    }

    #[test]
    fn characters_exclude_only_plain_spaces() {
        assert_eq!(count_characters("a b.c"), 4);
        assert_eq!(count_characters("a\tb"), 3);
        assert_eq!(count_characters("   "), 0);
    }
}

//! Occurrence scanning and context-window extraction.
//!
//! The query is matched as a case-insensitive literal. Occurrences are found
//! left-to-right in one pass, non-overlapping in their boundaries, and each
//! occurrence is then windowed independently: up to `context_words`
//! whitespace-delimited words immediately before and after the match. Window
//! text of adjacent occurrences may overlap; the match boundaries never do.

use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// The context captured around one occurrence of the query.
///
/// `term` is the matched text as it appears in the file, original casing
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchWindow {
    pub before: String,
    pub term: String,
    pub after: String,
}

/// Compiled matcher for one query at a fixed context-window size.
pub struct ContextExtractor {
    term: Regex,
    before: Regex,
    after: Regex,
}

impl ContextExtractor {
    /// Compiles the occurrence pattern and the two anchored window patterns.
    ///
    /// The query is escaped, so characters special to regex syntax match
    /// themselves.
    pub fn new(query: &str, context_words: usize) -> Result<Self> {
        let term = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .multi_line(true)
            .build()?;
        // A word unit before the match starts with whitespace; the first
        // unit after the match may attach directly to it, completing a
        // partially matched word.
        let before = Regex::new(&format!(r"(?:\s\S*){{0,{context_words}}}$"))?;
        let after = Regex::new(&format!(r"^(?:\s?\S*){{0,{context_words}}}"))?;
        Ok(Self {
            term,
            before,
            after,
        })
    }

    /// Cheap containment test, run before any window extraction.
    pub fn is_match(&self, text: &str) -> bool {
        self.term.is_match(text)
    }

    /// Returns every occurrence of the query in `text` with its context
    /// window, in occurrence order.
    pub fn extract(&self, text: &str) -> Vec<MatchWindow> {
        self.term
            .find_iter(text)
            .map(|m| {
                let before = self
                    .before
                    .find(&text[..m.start()])
                    .map(|w| w.as_str())
                    .unwrap_or_default();
                let after = self
                    .after
                    .find(&text[m.end()..])
                    .map(|w| w.as_str())
                    .unwrap_or_default();
                MatchWindow {
                    before: before.to_string(),
                    term: m.as_str().to_string(),
                    after: after.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(query: &str, context_words: usize, text: &str) -> Vec<MatchWindow> {
        ContextExtractor::new(query, context_words)
            .unwrap()
            .extract(text)
    }

    #[test]
    fn case_insensitive_occurrences() {
        let found = windows("rust", 2, "Rust is great. I like RUST and rust.");

        assert_eq!(found.len(), 3);
        assert_eq!(found[0].term, "Rust");
        assert_eq!(found[1].term, "RUST");
        assert_eq!(found[2].term, "rust");
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(windows("aa", 0, "aaaa").len(), 2);
        assert_eq!(windows("aa", 0, "aaa").len(), 1);
    }

    #[test]
    fn windows_capture_surrounding_words() {
        let found = windows("drei", 2, "eins zwei drei vier fünf");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].before, " zwei ");
        assert_eq!(found[0].after, " vier fünf");
    }

    #[test]
    fn before_window_is_limited() {
        // the whitespace directly before the match is a unit of its own
        let found = windows("ende", 2, "a b c d e ende");

        assert_eq!(found[0].before, " e ");
    }

    #[test]
    fn leading_word_without_whitespace_is_not_captured() {
        // a before-window unit must start with whitespace, so a text-initial
        // word directly before the match stays outside the window
        let found = windows("zwei", 3, "eins zwei drei");

        assert_eq!(found[0].before, " ");
    }

    #[test]
    fn after_window_completes_a_partial_word() {
        let found = windows("design", 1, "webdesign für designer und andere");

        assert_eq!(found.len(), 2);
        // first hit is inside "webdesign"; no whitespace before it
        assert_eq!(found[0].before, "");
        assert_eq!(found[0].term, "design");
        assert_eq!(found[0].after, " für");
        // second hit spends its single unit completing "designer"
        assert_eq!(found[1].before, " ");
        assert_eq!(found[1].after, "er");
    }

    #[test]
    fn zero_context_words_yields_bare_term() {
        let found = windows("mitte", 0, "davor mitte danach");

        assert_eq!(found[0].before, "");
        assert_eq!(found[0].term, "mitte");
        assert_eq!(found[0].after, "");
    }

    #[test]
    fn query_metacharacters_match_literally() {
        let found = windows("c++", 1, "wir schreiben c++ hier");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].term, "c++");
    }

    #[test]
    fn no_occurrences_for_absent_query() {
        assert!(windows("fehlt", 2, "hier steht etwas anderes").is_empty());
    }

    #[test]
    fn adjacent_occurrences_keep_their_own_windows() {
        let found = windows("wort", 2, "ein wort und wort zwei");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].after, " und wort");
        assert_eq!(found[1].before, " und ");
        assert_eq!(found[1].after, " zwei");
    }
}

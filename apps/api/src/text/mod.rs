// Text primitives shared by the parser and the scorer.
// Everything here is pure and allocation-light; static tables live in `Lazy` statics.

pub mod domain;
pub mod technical;
pub mod tokenizer;

/// Whether `term` occurs in `haystack` as a whole word. An edge of `term`
/// that is itself punctuation (`.net`, `c++`) needs no boundary there.
/// Both sides are expected to be lowercased already.
pub fn mentions(haystack: &str, term: &str) -> bool {
    let (Some(first), Some(last)) = (term.chars().next(), term.chars().next_back()) else {
        return false;
    };
    haystack.match_indices(term).any(|(at, _)| {
        let open = !first.is_alphanumeric()
            || !haystack[..at].chars().next_back().is_some_and(char::is_alphanumeric);
        let close = !last.is_alphanumeric()
            || !haystack[at + term.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric);
        open && close
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_respects_word_edges() {
        assert!(mentions("we use go and rust", "go"));
        assert!(!mentions("good governance", "go"));
        assert!(mentions("c++ / c# shop", "c++"));
        assert!(mentions("asp.net core", ".net"));
        assert!(!mentions("anything", ""));
    }

    #[test]
    fn test_mentions_checks_every_occurrence() {
        assert!(mentions("rustacean loves rust", "rust"));
    }
}

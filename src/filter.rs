use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_WORDS: HashSet<&'static str> = [
        "arse", "ass", "asshole", "bastard", "bitch", "bollocks", "crap", "cunt", "damn", "dick",
        "douche", "fuck", "fucker", "fucking", "motherfucker", "piss", "prick", "shit", "shitty",
        "slut", "twat", "wanker", "whore",
    ]
    .into_iter()
    .collect();
}

/// Word-list content filter. Flags a message when any alphanumeric token,
/// lowercased, matches a listed word; substrings inside longer words do not
/// count ("class" is clean).
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    words: HashSet<String>,
}

impl ProfanityFilter {
    pub fn new() -> Self {
        Self::with_words(DEFAULT_WORDS.iter().copied())
    }

    pub fn with_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        ProfanityFilter {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    pub fn is_profane(&self, text: &str) -> bool {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .any(|token| self.words.contains(&token.to_lowercase()))
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("hello there", false)]
    #[case("", false)]
    #[case("damn", true)]
    #[case("DAMN", true)]
    #[case("well, damn!", true)]
    #[case("classy assignment", false)]
    #[case("pass the salt", false)]
    fn test_default_list(#[case] text: &str, #[case] expected: bool) {
        let filter = ProfanityFilter::new();
        assert_eq!(filter.is_profane(text), expected);
    }

    #[test]
    fn test_custom_word_list() {
        let filter = ProfanityFilter::with_words(["bananas"]);
        assert!(filter.is_profane("no BANANAS here"));
        assert!(!filter.is_profane("damn"));
    }
}

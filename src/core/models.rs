use std::fmt;

use serde::Serialize;

/// Languages a flashcard can be tagged with. Parsed case-insensitively from
/// user input and CSV rows, rendered with canonical capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Chinese,
    French,
    German,
    Japanese,
    Korean,
    Malay,
    Spanish,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::Chinese,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Korean,
        Language::Malay,
        Language::Spanish,
        Language::Tamil,
    ];

    pub fn parse(input: &str) -> Option<Language> {
        let wanted = input.trim();
        Language::ALL.iter().copied().find(|language| language.name().eq_ignore_ascii_case(wanted))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Malay => "Malay",
            Language::Spanish => "Spanish",
            Language::Tamil => "Tamil",
        }
    }

    pub fn supported_names() -> String {
        Language::ALL.map(|language| language.name()).join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated flashcard phrase: non-blank, free of control characters and at
/// most `MAX_LEN` characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phrase(String);

impl Phrase {
    pub const MAX_LEN: usize = 100;

    pub fn new(input: &str) -> Option<Phrase> {
        let trimmed = input.trim();
        if Phrase::is_valid(trimmed) {
            Some(Phrase(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn is_valid(input: &str) -> bool {
        let trimmed = input.trim();
        !trimmed.is_empty()
            && trimmed.chars().count() <= Phrase::MAX_LEN
            && !trimmed.chars().any(char::is_control)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test, used by the find predicate.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.0.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable language/foreign-phrase/English-phrase triple. Equality (and
/// therefore uniqueness and duplicate detection) covers the triple only;
/// `flipped` is per-card display direction and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    pub language: Language,
    pub foreign_phrase: Phrase,
    pub english_phrase: Phrase,
    #[serde(skip_serializing)]
    pub flipped: bool,
}

impl Flashcard {
    pub fn new(language: Language, foreign_phrase: Phrase, english_phrase: Phrase) -> Flashcard {
        Flashcard { language, foreign_phrase, english_phrase, flipped: false }
    }

    /// The same card with its display direction toggled.
    pub fn flipped_copy(&self) -> Flashcard {
        Flashcard { flipped: !self.flipped, ..self.clone() }
    }

    /// The phrase shown first, honoring the flip direction.
    pub fn front(&self) -> &Phrase {
        if self.flipped {
            &self.english_phrase
        } else {
            &self.foreign_phrase
        }
    }

    /// The phrase shown second, honoring the flip direction.
    pub fn back(&self) -> &Phrase {
        if self.flipped {
            &self.foreign_phrase
        } else {
            &self.english_phrase
        }
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Flashcard) -> bool {
        self.language == other.language
            && self.foreign_phrase == other.foreign_phrase
            && self.english_phrase == other.english_phrase
    }
}

impl Eq for Flashcard {}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Language: {}; Foreign phrase: {}; English phrase: {}",
            self.language, self.foreign_phrase, self.english_phrase
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!(Language::parse("Chinese"), Some(Language::Chinese));
        assert_eq!(Language::parse("  japanese "), Some(Language::Japanese));
        assert_eq!(Language::parse("GERMAN"), Some(Language::German));
        assert_eq!(Language::parse("Klingon"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn phrase_validation() {
        assert!(Phrase::new("hello").is_some());
        assert!(Phrase::new("  早安  ").is_some());

        // Blank and control characters are rejected
        assert!(Phrase::new("").is_none());
        assert!(Phrase::new("   ").is_none());
        assert!(Phrase::new("a\tb").is_none());

        // Length boundary is counted in characters, not bytes
        let at_limit: String = "好".repeat(Phrase::MAX_LEN);
        assert!(Phrase::new(&at_limit).is_some());
        let over_limit: String = "好".repeat(Phrase::MAX_LEN + 1);
        assert!(Phrase::new(&over_limit).is_none());
    }

    #[test]
    fn phrase_trims_surrounding_whitespace() {
        let phrase = Phrase::new("  Good morning ").unwrap();
        assert_eq!(phrase.as_str(), "Good morning");
    }

    #[test]
    fn phrase_keyword_matching_ignores_case() {
        let phrase = Phrase::new("Good Morning").unwrap();
        assert!(phrase.contains_keyword("good"));
        assert!(phrase.contains_keyword("MORN"));
        assert!(!phrase.contains_keyword("evening"));
    }

    #[test]
    fn flashcard_equality_ignores_flip_state() {
        let card = Flashcard::new(
            Language::Chinese,
            Phrase::new("你好").unwrap(),
            Phrase::new("hello").unwrap(),
        );
        let flipped = card.flipped_copy();

        assert!(flipped.flipped);
        assert_eq!(card, flipped);
        assert_eq!(flipped.front(), &card.english_phrase);
        assert_eq!(flipped.back(), &card.foreign_phrase);

        // Flipping twice restores the original direction
        assert!(!flipped.flipped_copy().flipped);
    }

    #[test]
    fn flashcard_display_lists_all_three_fields() {
        let card = Flashcard::new(
            Language::French,
            Phrase::new("bonjour").unwrap(),
            Phrase::new("hello").unwrap(),
        );
        assert_eq!(
            card.to_string(),
            "Language: French; Foreign phrase: bonjour; English phrase: hello"
        );
    }
}

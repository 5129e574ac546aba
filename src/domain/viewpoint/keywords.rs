//! Ordered keyword tables for intent classification.
//!
//! Matching is keyword-exact. Tables are consulted in order and the first
//! hit wins.

use serde::{Deserialize, Serialize};

/// How a table entry is matched against lowercased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Entry may appear anywhere, including inside a longer word.
    Substring,
    /// Entry must be bounded by non-alphanumeric characters or the ends.
    WholeWord,
}

/// An ordered list of lowercase phrases.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    pub entries: &'static [&'static str],
    pub mode: MatchMode,
}

impl KeywordTable {
    pub const fn new(entries: &'static [&'static str], mode: MatchMode) -> Self {
        Self { entries, mode }
    }

    /// Returns the first entry found in `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .copied()
            .find(|entry| match self.mode {
                MatchMode::Substring => lowered.contains(entry),
                MatchMode::WholeWord => contains_whole_word(&lowered, entry),
            })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Phrases signalling the user cites information that is new to us.
pub const NEW_INFORMATION_MARKERS: KeywordTable = KeywordTable::new(
    &[
        "new study",
        "recent research",
        "just published",
        "new report",
        "latest findings",
        "recently discovered",
        "new data shows",
        "according to new",
        "new evidence",
        "recent developments",
    ],
    MatchMode::Substring,
);

/// Phrases signalling the user declines to explore another perspective.
///
/// Whole-word so that "no" does not fire on "economic" or "know".
pub const DECLINE_PHRASES: KeywordTable = KeywordTable::new(
    &[
        "no thanks",
        "continue with my own",
        "own perspective",
        "no",
        "skip",
        "my perspective",
        "pass",
        "don't want to",
        "not interested",
        "stay with mine",
    ],
    MatchMode::WholeWord,
);

/// Substrings that suggest the evidence cites a web source.
pub const CITATION_MARKERS: KeywordTable = KeywordTable::new(&["http", "www"], MatchMode::Substring);

const DEEPEN_KEYWORDS: KeywordTable = KeywordTable::new(
    &["develop", "further", "more", "questions", "continue", "depth"],
    MatchMode::Substring,
);

const DEBATE_KEYWORDS: KeywordTable = KeywordTable::new(
    &["debate", "agent", "different", "perspectives", "discuss"],
    MatchMode::Substring,
);

const WHITEBOARD_KEYWORDS: KeywordTable = KeywordTable::new(
    &["whiteboard", "visual", "map", "draw"],
    MatchMode::Substring,
);

/// How the user classified their evidence, as stored in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    NewInformation,
    StandardEvidence,
}

impl EvidenceKind {
    pub fn classify(evidence: &str) -> Self {
        if NEW_INFORMATION_MARKERS.matches(evidence) {
            Self::NewInformation
        } else {
            Self::StandardEvidence
        }
    }

    pub fn is_new_information(&self) -> bool {
        matches!(self, Self::NewInformation)
    }
}

/// The three branches offered by the next-steps menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepChoice {
    DevelopFurther,
    Debate,
    Whiteboard,
}

impl NextStepChoice {
    /// Classifies trimmed user input. Menu digits win over keywords; the
    /// branches are checked in menu order.
    pub fn classify(choice: &str) -> Option<Self> {
        let branches = [
            ("1", DEEPEN_KEYWORDS, Self::DevelopFurther),
            ("2", DEBATE_KEYWORDS, Self::Debate),
            ("3", WHITEBOARD_KEYWORDS, Self::Whiteboard),
        ];
        branches
            .into_iter()
            .find(|(digit, keywords, _)| choice == *digit || keywords.matches(choice))
            .map(|(_, _, branch)| branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod keyword_table {
        use super::*;

        #[test]
        fn substring_mode_matches_inside_words() {
            let table = KeywordTable::new(&["map"], MatchMode::Substring);
            assert!(table.matches("Mapping it out"));
        }

        #[test]
        fn whole_word_mode_requires_boundaries() {
            let table = KeywordTable::new(&["no"], MatchMode::WholeWord);
            assert!(table.matches("No."));
            assert!(table.matches("well, no"));
            assert!(!table.matches("economic"));
            assert!(!table.matches("I know"));
        }

        #[test]
        fn whole_word_checks_every_occurrence() {
            let table = KeywordTable::new(&["no"], MatchMode::WholeWord);
            assert!(table.matches("nothing, no"));
        }

        #[test]
        fn first_match_follows_table_order() {
            let table = KeywordTable::new(&["beta", "alpha"], MatchMode::Substring);
            assert_eq!(table.first_match("alpha beta"), Some("beta"));
        }

        #[test]
        fn matching_is_case_insensitive() {
            assert!(NEW_INFORMATION_MARKERS.matches("A NEW STUDY found"));
        }
    }

    mod decline_phrases {
        use super::*;

        #[test]
        fn recognises_no_thanks() {
            assert!(DECLINE_PHRASES.matches("no thanks"));
        }

        #[test]
        fn recognises_phrase_with_apostrophe() {
            assert!(DECLINE_PHRASES.matches("I don't want to"));
        }

        #[test]
        fn ignores_catalog_selection() {
            assert!(!DECLINE_PHRASES.matches("I'll take the ethical one"));
            assert!(!DECLINE_PHRASES.matches("Economic Perspective"));
        }
    }

    mod evidence_kind {
        use super::*;

        #[test]
        fn flags_new_information() {
            assert_eq!(
                EvidenceKind::classify("Recent research shows a decline"),
                EvidenceKind::NewInformation
            );
        }

        #[test]
        fn defaults_to_standard_evidence() {
            assert_eq!(
                EvidenceKind::classify("My grandfather told me so"),
                EvidenceKind::StandardEvidence
            );
        }

        #[test]
        fn serializes_snake_case() {
            let json = serde_json::to_string(&EvidenceKind::NewInformation).unwrap();
            assert_eq!(json, "\"new_information\"");
        }
    }

    mod next_step_choice {
        use super::*;

        #[test]
        fn digits_select_branches() {
            assert_eq!(NextStepChoice::classify("1"), Some(NextStepChoice::DevelopFurther));
            assert_eq!(NextStepChoice::classify("2"), Some(NextStepChoice::Debate));
            assert_eq!(NextStepChoice::classify("3"), Some(NextStepChoice::Whiteboard));
        }

        #[test]
        fn keywords_select_branches() {
            assert_eq!(
                NextStepChoice::classify("let's see a debate"),
                Some(NextStepChoice::Debate)
            );
            assert_eq!(
                NextStepChoice::classify("I'd like to draw it"),
                Some(NextStepChoice::Whiteboard)
            );
        }

        #[test]
        fn earlier_branch_wins_when_both_match() {
            assert_eq!(
                NextStepChoice::classify("more debate please"),
                Some(NextStepChoice::DevelopFurther)
            );
        }

        #[test]
        fn unrecognized_input_is_none() {
            assert_eq!(NextStepChoice::classify("banana"), None);
            assert_eq!(NextStepChoice::classify("4"), None);
        }
    }
}

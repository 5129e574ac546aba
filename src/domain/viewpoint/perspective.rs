//! The perspective catalog and selection normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed analytical lenses a user may look through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    Economic,
    Social,
    Ethical,
    Legal,
    Environmental,
}

impl Perspective {
    /// The catalog, in declared order. Normalization tie-breaks on this order.
    pub const CATALOG: [Perspective; 5] = [
        Self::Economic,
        Self::Social,
        Self::Ethical,
        Self::Legal,
        Self::Environmental,
    ];

    /// Display label, e.g. "Economic Perspective".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Economic => "Economic Perspective",
            Self::Social => "Social Perspective",
            Self::Ethical => "Ethical Perspective",
            Self::Legal => "Legal Perspective",
            Self::Environmental => "Environmental Perspective",
        }
    }

    /// Lowercase keyword searched for in free-form selections.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Economic => "economic",
            Self::Social => "social",
            Self::Ethical => "ethical",
            Self::Legal => "legal",
            Self::Environmental => "environmental",
        }
    }

    /// Comma-separated list of every label, for re-prompts.
    pub fn catalog_listing() -> String {
        Self::CATALOG
            .iter()
            .map(Perspective::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of normalizing a user's perspective selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerspectiveChoice {
    Catalog(Perspective),
    /// Free-form text that matched nothing in the catalog.
    Custom(String),
}

impl PerspectiveChoice {
    /// The value stored in `selected_perspective`.
    pub fn as_stored(&self) -> &str {
        match self {
            Self::Catalog(p) => p.label(),
            Self::Custom(raw) => raw,
        }
    }

    /// Phrase used inside sentences, e.g. "the Ethical Perspective".
    pub fn phrase(&self) -> String {
        match self {
            Self::Catalog(p) => format!("the {}", p.label()),
            Self::Custom(raw) => format!("the {} perspective", raw),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Normalizes a selection against the catalog.
///
/// Stages, each returning the first catalog entry in declared order:
/// exact label, case-insensitive label, keyword contained in the
/// selection. Falls through to [`PerspectiveChoice::Custom`].
pub fn normalize_perspective(selection: &str) -> PerspectiveChoice {
    if let Some(p) = Perspective::CATALOG.iter().find(|p| p.label() == selection) {
        return PerspectiveChoice::Catalog(*p);
    }

    let lowered = selection.to_lowercase();

    if let Some(p) = Perspective::CATALOG
        .iter()
        .find(|p| p.label().to_lowercase() == lowered)
    {
        return PerspectiveChoice::Catalog(*p);
    }

    if let Some(p) = Perspective::CATALOG
        .iter()
        .find(|p| lowered.contains(p.keyword()))
    {
        tracing::debug!(selection, matched = p.label(), "Matched perspective by keyword");
        return PerspectiveChoice::Catalog(*p);
    }

    PerspectiveChoice::Custom(selection.to_string())
}

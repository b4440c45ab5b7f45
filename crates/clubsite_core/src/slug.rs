//! URL slug helpers and the panel route derived from a slug.

use crate::classify::HALL_OF_FAME;

pub const HALL_OF_FAME_SLUG: &str = "hall-of-fame";

/// Lowercases, drops everything but ASCII word characters, whitespace and
/// hyphens, then joins words with single hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Replaces hyphens with spaces and capitalizes the first letter of each word.
pub fn deslugify(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut at_word_start = true;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

/// Which collection a governing-panel page reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRoute {
    HallOfFame,
    /// A semester, named as stored (e.g. `Fall 2024` for `fall-2024`).
    Semester { collection: String },
}

impl PanelRoute {
    pub fn from_slug(slug: &str) -> Self {
        if slug == HALL_OF_FAME_SLUG {
            return PanelRoute::HallOfFame;
        }
        PanelRoute::Semester {
            collection: deslugify(slug),
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            PanelRoute::HallOfFame => HALL_OF_FAME.to_string(),
            PanelRoute::Semester { collection } => collection.clone(),
        }
    }

    /// Stable identifier used to key cached copies of this page.
    pub fn cache_key(&self) -> String {
        match self {
            PanelRoute::HallOfFame => HALL_OF_FAME_SLUG.to_string(),
            PanelRoute::Semester { collection } => slugify(collection),
        }
    }
}

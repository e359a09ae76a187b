//! Identifier slugging for graph-local ids.
//!
//! # Responsibility
//! - Turn free-text names into lowercase, URL-safe path segments.
//! - Keep identifiers human-readable instead of hashing.
//!
//! # Invariants
//! - Output only contains `[a-z0-9]` and single interior hyphens.
//! - Distinct names may normalize to the same slug; callers accept that
//!   collision risk in exchange for readable identifiers.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("slug pattern must compile"));

/// Converts a free-text name into a URL-safe identifier token.
///
/// Accented characters are decomposed to their base letter, the result is
/// lowercased, and every maximal run of characters outside `[a-z0-9]`
/// collapses to a single hyphen. Leading and trailing hyphens are trimmed,
/// so the empty string maps to itself.
pub fn slugify(name: &str) -> String {
    let stripped: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    let hyphenated = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

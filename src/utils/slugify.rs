//! Slug generation
//!
//! Turns a group name into the URL-safe form stored in the `slug` field and
//! in the slug map. The transformation is deterministic and may produce an
//! empty string for degenerate input such as `"!!!"`.

use regex::Regex;
use std::sync::LazyLock;

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\s\d\-_]").expect("static slug pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static slug pattern"));
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static slug pattern"));

/// Converts arbitrary strings into slugs
pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Slugifier used by the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Lowercase, replace disallowed characters with dashes, collapse runs and
/// strip a leading or trailing dash.
pub fn slugify(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let replaced = INVALID_CHARS.replace_all(trimmed, "-");
    let lowered = replaced.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lowered, "-");
    let collapsed = DASH_RUN.replace_all(&dashed, "-");

    let slug = collapsed.strip_suffix('-').unwrap_or(&collapsed);
    let slug = slug.strip_prefix('-').unwrap_or(slug);
    slug.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(slugify("book-club"), "book-club");
        assert_eq!(slugify("Book Club"), "book-club");
        assert_eq!(slugify("  Global Moderators  "), "global-moderators");
    }

    #[test]
    fn test_punctuation_is_replaced() {
        assert_eq!(slugify("Rust & Friends!"), "rust-friends");
        assert_eq!(slugify("a.b,c"), "a-b-c");
        assert_eq!(slugify("under_score"), "under_score");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(slugify("Клуб Книги"), "клуб-книги");
        assert_eq!(slugify("Café"), "café");
    }

    #[test]
    fn test_degenerate_input_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("-"), "");
    }

    proptest! {
        #[test]
        fn ascii_slug_is_stable(input in "[ -~]{0,40}") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn slug_has_no_edge_dashes_or_spaces(input in "\\PC{0,40}") {
            let slug = slugify(&input);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert!(!slug.chars().any(char::is_whitespace));
        }
    }
}

//! Slug derivation from human-readable titles.

/// Derives a path- and URL-safe identifier from a display title.
///
/// The title is lowercased, ASCII alphanumeric characters are kept, and
/// every run of other characters is collapsed into a single `-`. The result
/// never starts or ends with a separator, so re-deriving a slug from itself
/// is a no-op.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }

            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("Test Site"), "test-site");
        assert_eq!(slugify("My -- Cool   Site!"), "my-cool-site");
        assert_eq!(slugify("hello_world 2"), "hello-world-2");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("!!bang!!"), "bang");
    }

    #[test]
    fn idempotent() {
        for title in ["Test Site", "a.b.c", "UPPER lower", "42"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn output_charset_is_safe() {
        let slug = slugify("Ünïcode & <spaces> / slashes");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn empty_when_no_usable_characters() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!@#$%"), "");
    }
}

use super::validation::{is_slug_char, MAX_SLUG_LEN};

/// Derive a slug from a free-form title
///
/// Lowercases, drops every character outside `[a-z0-9-]` except whitespace,
/// turns whitespace and hyphen runs into a single hyphen, trims hyphens at
/// both ends and truncates to 50 characters. The result is either empty or
/// passes `validate_slug`, and deriving it again returns it unchanged.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        } else if is_slug_char(c) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
        // anything else vanishes without separating words
    }

    if slug.len() > MAX_SLUG_LEN {
        // ASCII only past this point, so byte and char indices agree
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

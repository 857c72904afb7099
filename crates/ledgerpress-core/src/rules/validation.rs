use crate::errors::{CmsError, Result};

/// Longest accepted site or template name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted page slug, in characters
pub const MAX_SLUG_LEN: usize = 50;

const ADDRESS_HEX_DIGITS: usize = 64;

/// Check a ledger address: optional `0x`/`0X` prefix and exactly 64 hex digits
///
/// Object ids share the address grammar, so this also guards every
/// object-reference argument.
pub fn is_valid_address(value: &str) -> bool {
    let digits = hex_digits(value);
    digits.len() == ADDRESS_HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn hex_digits(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Validate an address and return it as `0x` plus 64 lowercase hex digits
///
/// # Errors
/// Same as `validate_address`.
pub fn canonical_address(field: &str, value: &str) -> Result<String> {
    validate_address(field, value)?;
    Ok(format!("0x{}", hex_digits(value).to_ascii_lowercase()))
}

/// Compare two addresses or object ids by value
///
/// Prefix, case and leading zeros are ignored, so `0x6` equals the
/// 64-digit form of the clock id.
pub fn same_address(a: &str, b: &str) -> bool {
    let a = hex_digits(a).trim_start_matches('0');
    let b = hex_digits(b).trim_start_matches('0');
    a.eq_ignore_ascii_case(b)
}

/// Validate an address-shaped argument
///
/// # Errors
/// Returns `CmsError::InvalidAddress` naming `field` when `value` fails the
/// address grammar.
pub fn validate_address(field: &str, value: &str) -> Result<()> {
    if is_valid_address(value) {
        Ok(())
    } else {
        Err(CmsError::invalid_address(field, value))
    }
}

/// Validate a site or template name
///
/// Non-blank, at most 100 characters, drawn from ASCII letters, digits,
/// space, underscore and hyphen. Tabs and other whitespace are rejected.
///
/// # Errors
/// Returns `CmsError::InvalidName` with the first rule the name breaks.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_name("must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid_name(&format!(
            "must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(invalid_name(&format!(
            "character {:?} is not allowed (letters, digits, space, '_' and '-' only)",
            bad
        )));
    }
    Ok(())
}

pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// Validate a page slug
///
/// Non-blank, at most 50 characters, drawn from lowercase ASCII letters,
/// digits and hyphen.
///
/// # Errors
/// Returns `CmsError::InvalidSlug` with the first rule the slug breaks.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.trim().is_empty() {
        return Err(invalid_slug("must not be empty"));
    }
    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(invalid_slug(&format!(
            "must be at most {} characters",
            MAX_SLUG_LEN
        )));
    }
    if let Some(bad) = slug.chars().find(|c| !is_slug_char(*c)) {
        return Err(invalid_slug(&format!(
            "character {:?} is not allowed (lowercase letters, digits and '-' only)",
            bad
        )));
    }
    Ok(())
}

pub fn is_valid_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}

pub(crate) fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-'
}

fn invalid_name(reason: &str) -> CmsError {
    CmsError::InvalidName {
        reason: reason.to_string(),
    }
}

fn invalid_slug(reason: &str) -> CmsError {
    CmsError::InvalidSlug {
        reason: reason.to_string(),
    }
}

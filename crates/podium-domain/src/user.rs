//! User name rules.

/// Maximum length of `users.name`, matching the column width.
pub const MAX_USERNAME_LEN: usize = 64;

/// Returns `true` if `name` is non-blank, has no surrounding whitespace and
/// fits the column.
pub fn validate_username(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && name.chars().count() <= MAX_USERNAME_LEN
        && !name.contains('/')
}

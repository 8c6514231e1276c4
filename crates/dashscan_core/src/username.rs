use thiserror::Error;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username is empty")]
    Empty,
    #[error("username must be between {MIN_LEN} and {MAX_LEN} characters, got {0}")]
    Length(usize),
    #[error("username contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Syntax check for usernames typed by a person; returns the trimmed name.
///
/// The engine never calls this. Callers validate before searching.
pub fn validate_username(raw: &str) -> Result<&str, UsernameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(UsernameError::Empty);
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(UsernameError::InvalidChar(bad));
    }
    let len = name.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(UsernameError::Length(len));
    }
    Ok(name)
}

use thiserror::Error;

/// Reasons to keep a form from being posted. The message is shown to the user as is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide both name and rank.")]
    MissingNameOrRank,
    #[error("Enter username and password.")]
    MissingCredentials,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

/// Both fields are required once trimmed. A missing field counts as empty.
pub fn validate_member_to_add(name: Option<&str>, rank: Option<&str>) -> Result<(), ValidationError> {
    if is_blank(name) || is_blank(rank) {
        Err(ValidationError::MissingNameOrRank)
    } else {
        Ok(())
    }
}

/// The username is trimmed, the password is not: a password of spaces is accepted.
pub fn validate_credentials(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(), ValidationError> {
    if is_blank(username) || password.is_none_or(str::is_empty) {
        Err(ValidationError::MissingCredentials)
    } else {
        Ok(())
    }
}

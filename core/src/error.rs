use thiserror::Error;

/// Why a named profile could not be turned into a usable session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("sts:GetCallerIdentity failed for profile {profile}: {message}")]
    CallerIdentity { profile: String, message: String },
    #[error("sts:GetCallerIdentity returned no account id for profile {profile}")]
    MissingAccountId { profile: String },
}


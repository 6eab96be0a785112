use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration rejected because the email already has an account.
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Login rejected because no account matches the email.
    #[error("No account for email: {0}")]
    UnknownAccount(String),

    /// Login rejected because the password does not match.
    #[error("Wrong password")]
    WrongPassword,

    /// The backing key-value store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] bridge_traits::BridgeError),

    /// Stored state could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;

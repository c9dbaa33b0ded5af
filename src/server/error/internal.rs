use thiserror::Error;

/// Internal failures indicating misconfiguration or a bug rather than a bad request.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or to parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a JWT failed.
    #[error("Failed to issue token: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),

    /// Every random manual invoice number tried was already taken.
    #[error("Could not allocate a free invoice number for {0}")]
    InvoiceNumberExhausted(String),
}

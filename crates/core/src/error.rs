/// Result alias used across the signing core.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the core reports to its caller.
///
/// A signature that was checked and rejected is not an error: verification
/// returns `Ok(false)` for that case.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse key material: {0}")]
    KeyParse(String),
    #[error("Invalid encoded signature: {0}")]
    Codec(String),
    #[error("Signing failed: {0}")]
    Signing(String),
}

impl Error {
    pub(crate) fn key_parse(msg: impl Into<String>) -> Self {
        Self::KeyParse(msg.into())
    }
}

use ledger_protocol::NONCE_SIZE;
use rand::{rngs::OsRng, RngCore};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NonceError {
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

pub trait NonceSource: Send + Sync {
    fn nonce(&self) -> Result<Vec<u8>, NonceError>;
}

/// Draws nonces from the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn nonce(&self) -> Result<Vec<u8>, NonceError> {
        let mut nonce = vec![0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|err| NonceError::Entropy(err.to_string()))?;
        Ok(nonce)
    }
}

/// Hands out the same nonce on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNonceSource {
    nonce: Vec<u8>,
}

impl FixedNonceSource {
    pub fn new(nonce: impl Into<Vec<u8>>) -> Self {
        Self {
            nonce: nonce.into(),
        }
    }
}

impl NonceSource for FixedNonceSource {
    fn nonce(&self) -> Result<Vec<u8>, NonceError> {
        Ok(self.nonce.clone())
    }
}

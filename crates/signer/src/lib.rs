//! Identities that present themselves and sign: a canned test double and Ed25519.
#![forbid(unsafe_code)]

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use ledger_protocol::{canonical_bytes, msp::SerializedIdentity};
use thiserror::Error;

pub const DEFAULT_STUB_IDENTITY: &[u8] = b"signer";
pub const DEFAULT_STUB_SIGNATURE: &[u8] = b"signature";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("failed to serialize identity: {0}")]
    Serialize(String),
    #[error("failed to sign message: {0}")]
    Sign(String),
}

/// An identity that can present itself and sign on its own behalf.
pub trait SigningIdentity: Send + Sync {
    fn serialize(&self) -> Result<Vec<u8>, SignerError>;
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError>;
}

/// Test double returning canned results, whatever it is asked to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubSigner {
    identity: Result<Vec<u8>, SignerError>,
    signature: Result<Vec<u8>, SignerError>,
}

impl Default for StubSigner {
    fn default() -> Self {
        Self {
            identity: Ok(DEFAULT_STUB_IDENTITY.to_vec()),
            signature: Ok(DEFAULT_STUB_SIGNATURE.to_vec()),
        }
    }
}

impl StubSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, identity: impl Into<Vec<u8>>) -> Self {
        self.identity = Ok(identity.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signature = Ok(signature.into());
        self
    }

    pub fn failing_serialize(mut self, reason: impl Into<String>) -> Self {
        self.identity = Err(SignerError::Serialize(reason.into()));
        self
    }

    pub fn failing_sign(mut self, reason: impl Into<String>) -> Self {
        self.signature = Err(SignerError::Sign(reason.into()));
        self
    }
}

impl SigningIdentity for StubSigner {
    fn serialize(&self) -> Result<Vec<u8>, SignerError> {
        self.identity.clone()
    }

    fn sign(&self, _message: &[u8]) -> Result<Vec<u8>, SignerError> {
        self.signature.clone()
    }
}

/// Ed25519 key bound to an MSP id. Serializes as a `SerializedIdentity`
/// whose id bytes are the raw verifying key.
#[derive(Debug, Clone)]
pub struct Ed25519Signer {
    mspid: String,
    key: SigningKey,
}

impl Ed25519Signer {
    pub fn new(mspid: impl Into<String>, key: SigningKey) -> Self {
        Self {
            mspid: mspid.into(),
            key,
        }
    }

    pub fn mspid(&self) -> &str {
        &self.mspid
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

impl SigningIdentity for Ed25519Signer {
    fn serialize(&self) -> Result<Vec<u8>, SignerError> {
        Ok(canonical_bytes(&SerializedIdentity {
            mspid: self.mspid.clone(),
            id_bytes: self.key.verifying_key().to_bytes().to_vec(),
        }))
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        Ok(self.key.sign(message).to_bytes().to_vec())
    }
}

//! Ledger wire types and the hashing rules the proposal pipeline applies to them.
#![forbid(unsafe_code)]
#![allow(clippy::derive_partial_eq_without_eq)]

use prost::Message;
use sha2::{Digest, Sha256};

pub mod common;
pub mod msp;
pub mod peer;
pub mod rwset;

/// Length in bytes of a proposal nonce.
pub const NONCE_SIZE: usize = 24;

/// Encode a protobuf message with prost's deterministic field ordering.
pub fn canonical_bytes<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Transaction id for a proposal: lowercase hex of SHA-256(nonce || creator).
pub fn compute_tx_id(nonce: &[u8], creator: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce);
    hasher.update(creator);
    hex::encode(hasher.finalize())
}

/// Hash binding a proposal response to the proposal it answers.
///
/// Covers the serialized channel header, the serialized signature header and the
/// chaincode proposal payload stripped of its transient map.
pub fn proposal_hash(
    header: &common::Header,
    proposal_payload: &peer::ChaincodeProposalPayload,
) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(&header.channel_header);
    hasher.update(&header.signature_header);
    hasher.update(proposal_payload_for_tx(proposal_payload));
    hasher.finalize().to_vec()
}

/// Bytes of the proposal payload that travel inside the transaction (no transient data).
pub fn proposal_payload_for_tx(payload: &peer::ChaincodeProposalPayload) -> Vec<u8> {
    canonical_bytes(&peer::ChaincodeProposalPayload {
        input: payload.input.clone(),
        transient_map: Default::default(),
    })
}

/// SHA-256 over the concatenation of every data entry of a block.
pub fn block_data_hash(data: &common::BlockData) -> Vec<u8> {
    let mut hasher = Sha256::new();
    for entry in &data.data {
        hasher.update(entry);
    }
    hasher.finalize().to_vec()
}

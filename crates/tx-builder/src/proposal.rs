//! Client and endorser halves of the proposal exchange.

use ledger_protocol::common::{ChannelHeader, Header, HeaderType, SignatureHeader, Timestamp};
use ledger_protocol::peer::{
    ChaincodeAction, ChaincodeHeaderExtension, ChaincodeId, ChaincodeInvocationSpec,
    ChaincodeProposalPayload, ChaincodeSpec, Endorsement, Proposal, ProposalResponse,
    ProposalResponsePayload, Response,
};
use ledger_protocol::{canonical_bytes, proposal_hash};
use prost::Message;
use signer::SigningIdentity;
use thiserror::Error;

use crate::BuildError;

pub const PROPOSAL_RESPONSE_VERSION: i32 = 1;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProposalError {
    #[error("channel id is empty")]
    EmptyChannel,
    #[error("invocation spec carries no chaincode id")]
    MissingChaincodeId,
    #[error("chaincode name is empty")]
    EmptyChaincodeName,
    #[error("at least one proposal response is required")]
    NoResponses,
    #[error("signer must be the same as the one referenced in the header")]
    CreatorMismatch,
    #[error("proposal response was not successful, error code {status}, msg {message}")]
    UnsuccessfulResponse { status: i32, message: String },
    #[error("proposal response payloads do not match")]
    PayloadMismatch,
}

pub fn invocation_spec(chaincode_id: &ChaincodeId) -> ChaincodeInvocationSpec {
    ChaincodeInvocationSpec {
        chaincode_spec: Some(ChaincodeSpec {
            chaincode_id: Some(chaincode_id.clone()),
            ..Default::default()
        }),
    }
}

/// Proposal for `invocation` carrying `tx_id` and `nonce` verbatim.
pub fn create_chaincode_proposal(
    tx_id: &str,
    header_type: HeaderType,
    channel_id: &str,
    invocation: &ChaincodeInvocationSpec,
    nonce: &[u8],
    creator: &[u8],
    timestamp: Timestamp,
) -> Result<Proposal, ProposalError> {
    if channel_id.is_empty() {
        return Err(ProposalError::EmptyChannel);
    }
    let chaincode_id = invocation
        .chaincode_spec
        .as_ref()
        .and_then(|spec| spec.chaincode_id.as_ref())
        .ok_or(ProposalError::MissingChaincodeId)?;
    if chaincode_id.name.is_empty() {
        return Err(ProposalError::EmptyChaincodeName);
    }

    let extension = canonical_bytes(&ChaincodeHeaderExtension {
        chaincode_id: Some(chaincode_id.clone()),
    });
    let payload = canonical_bytes(&ChaincodeProposalPayload {
        input: canonical_bytes(invocation),
        transient_map: Default::default(),
    });
    // epoch stays zero, as on the client path
    let header = Header {
        channel_header: canonical_bytes(&ChannelHeader {
            r#type: header_type.into(),
            version: 0,
            timestamp: Some(timestamp),
            channel_id: channel_id.to_string(),
            tx_id: tx_id.to_string(),
            epoch: 0,
            extension,
            tls_cert_hash: Vec::new(),
        }),
        signature_header: canonical_bytes(&SignatureHeader {
            creator: creator.to_vec(),
            nonce: nonce.to_vec(),
        }),
    };

    Ok(Proposal {
        header: canonical_bytes(&header),
        payload,
        extension: Vec::new(),
    })
}

/// Endorser's answer to `proposal`: the simulated action, bound to the
/// proposal by hash and signed over `payload || endorser`.
pub fn create_proposal_response(
    proposal: &Proposal,
    response: Response,
    results: &[u8],
    events: &[u8],
    chaincode_id: &ChaincodeId,
    endorser: &dyn SigningIdentity,
) -> Result<ProposalResponse, BuildError> {
    let header = Header::decode(proposal.header.as_slice())?;
    let proposal_payload = ChaincodeProposalPayload::decode(proposal.payload.as_slice())?;

    let action = ChaincodeAction {
        results: results.to_vec(),
        events: events.to_vec(),
        response: Some(response),
        chaincode_id: Some(chaincode_id.clone()),
    };
    let payload = canonical_bytes(&ProposalResponsePayload {
        proposal_hash: proposal_hash(&header, &proposal_payload),
        extension: canonical_bytes(&action),
    });

    let endorser_bytes = endorser.serialize()?;
    let mut preimage = payload.clone();
    preimage.extend_from_slice(&endorser_bytes);
    let signature = endorser.sign(&preimage)?;

    Ok(ProposalResponse {
        version: PROPOSAL_RESPONSE_VERSION,
        timestamp: None,
        response: Some(Response {
            status: 200,
            message: "OK".to_string(),
            payload: Vec::new(),
        }),
        payload,
        endorsement: Some(Endorsement {
            endorser: endorser_bytes,
            signature,
        }),
    })
}

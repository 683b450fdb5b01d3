use ledger_protocol::common::{ChannelHeader, Envelope, Header, Payload, SignatureHeader};
use ledger_protocol::peer::{
    ChaincodeAction, ChaincodeActionPayload, ChaincodeEndorsedAction, ChaincodeProposalPayload,
    Proposal, ProposalResponse, ProposalResponsePayload, Transaction, TransactionAction,
};
use ledger_protocol::{canonical_bytes, proposal_payload_for_tx};
use prost::Message;
use signer::SigningIdentity;

use crate::proposal::ProposalError;
use crate::BuildError;

/// Fold endorsed responses to `proposal` into an envelope signed by `signer`,
/// who must be the proposal's creator.
pub fn assemble_signed_envelope(
    proposal: &Proposal,
    signer: &dyn SigningIdentity,
    responses: &[ProposalResponse],
) -> Result<Envelope, BuildError> {
    let Some(first) = responses.first() else {
        return Err(ProposalError::NoResponses.into());
    };

    let header = Header::decode(proposal.header.as_slice())?;
    let proposal_payload = ChaincodeProposalPayload::decode(proposal.payload.as_slice())?;

    let signer_bytes = signer.serialize()?;
    let signature_header = SignatureHeader::decode(header.signature_header.as_slice())?;
    if signer_bytes != signature_header.creator {
        return Err(ProposalError::CreatorMismatch.into());
    }

    let mut endorsements = Vec::with_capacity(responses.len());
    for response in responses {
        let (status, message) = response
            .response
            .as_ref()
            .map(|r| (r.status, r.message.clone()))
            .unwrap_or_default();
        if !(200..400).contains(&status) {
            return Err(ProposalError::UnsuccessfulResponse { status, message }.into());
        }
        if response.payload != first.payload {
            return Err(ProposalError::PayloadMismatch.into());
        }
        endorsements.extend(response.endorsement.clone());
    }

    let action_payload = ChaincodeActionPayload {
        chaincode_proposal_payload: proposal_payload_for_tx(&proposal_payload),
        action: Some(ChaincodeEndorsedAction {
            proposal_response_payload: first.payload.clone(),
            endorsements,
        }),
    };
    let transaction = Transaction {
        actions: vec![TransactionAction {
            header: header.signature_header.clone(),
            payload: canonical_bytes(&action_payload),
        }],
    };
    let payload = canonical_bytes(&Payload {
        header: Some(header),
        data: canonical_bytes(&transaction),
    });
    let signature = signer.sign(&payload)?;

    Ok(Envelope { payload, signature })
}

/// Decoded layers of an endorser transaction envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeView {
    pub channel_header: ChannelHeader,
    pub signature_header: SignatureHeader,
    pub transaction: Transaction,
}

impl EnvelopeView {
    pub fn parse(envelope: &Envelope) -> Result<Self, BuildError> {
        let payload = Payload::decode(envelope.payload.as_slice())?;
        let header = payload
            .header
            .ok_or(BuildError::MissingField("payload.header"))?;
        Ok(Self {
            channel_header: ChannelHeader::decode(header.channel_header.as_slice())?,
            signature_header: SignatureHeader::decode(header.signature_header.as_slice())?,
            transaction: Transaction::decode(payload.data.as_slice())?,
        })
    }

    pub fn tx_id(&self) -> &str {
        &self.channel_header.tx_id
    }

    pub fn endorsed_action(&self, index: usize) -> Result<ChaincodeEndorsedAction, BuildError> {
        let action = self
            .transaction
            .actions
            .get(index)
            .ok_or(BuildError::MissingField("transaction.actions"))?;
        ChaincodeActionPayload::decode(action.payload.as_slice())?
            .action
            .ok_or(BuildError::MissingField("chaincode_action_payload.action"))
    }

    /// The simulated chaincode action endorsed for the action at `index`.
    pub fn chaincode_action(&self, index: usize) -> Result<ChaincodeAction, BuildError> {
        let endorsed = self.endorsed_action(index)?;
        let response_payload =
            ProposalResponsePayload::decode(endorsed.proposal_response_payload.as_slice())?;
        Ok(ChaincodeAction::decode(response_payload.extension.as_slice())?)
    }
}

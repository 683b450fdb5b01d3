//! Signed endorser transactions built the way a client and its endorsers would.
#![forbid(unsafe_code)]

use ledger_protocol::common::{Envelope, HeaderType};
use ledger_protocol::compute_tx_id;
use ledger_protocol::peer::{ChaincodeId, Proposal, Response};
use ledger_protocol::rwset::{
    CollectionPvtReadWriteSet, DataModel, NsPvtReadWriteSet, TxPvtReadWriteSet,
};
use signer::{SignerError, SigningIdentity, StubSigner};
use thiserror::Error;

mod clock;
pub mod config;
pub mod envelope;
mod nonce;
pub mod proposal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FixtureDefaults;
pub use envelope::{assemble_signed_envelope, EnvelopeView};
pub use nonce::{FixedNonceSource, NonceError, NonceSource, OsNonceSource};
pub use proposal::ProposalError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("nonce generation failed: {0}")]
    Nonce(#[from] NonceError),
    #[error("signing identity failed: {0}")]
    Identity(#[from] SignerError),
    #[error("proposal construction failed: {0}")]
    Proposal(#[from] ProposalError),
    #[error("malformed wire message: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("failed to read fixture config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown header type: {0}")]
    UnknownHeaderType(String),
}

/// Everything a caller controls about one transaction fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub channel_id: String,
    pub chaincode_id: ChaincodeId,
    /// Status, message and payload the simulation claims to have produced.
    pub response: Response,
    pub simulation_results: Vec<u8>,
    /// Reused verbatim when set; derived from the proposal otherwise.
    pub tx_id: Option<String>,
    pub events: Option<Vec<u8>>,
    /// Accepted for call-site compatibility. The proposal hash does not cover it.
    pub visibility: Option<Vec<u8>>,
    pub header_type: HeaderType,
}

/// A transaction fixture together with the private data it wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct TxAndPvtData {
    pub tx_id: String,
    pub envelope: Envelope,
    pub pvt_rwset: Option<TxPvtReadWriteSet>,
}

pub struct TransactionBuilder {
    signer: Box<dyn SigningIdentity>,
    nonces: Box<dyn NonceSource>,
    clock: Box<dyn Clock>,
    defaults: FixtureDefaults,
}

impl std::fmt::Debug for TransactionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionBuilder")
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            signer: Box::new(StubSigner::default()),
            nonces: Box::new(OsNonceSource),
            clock: Box::new(SystemClock),
            defaults: FixtureDefaults::default(),
        }
    }
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signer(mut self, signer: impl SigningIdentity + 'static) -> Self {
        self.signer = Box::new(signer);
        self
    }

    pub fn with_nonce_source(mut self, nonces: impl NonceSource + 'static) -> Self {
        self.nonces = Box::new(nonces);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_defaults(mut self, defaults: FixtureDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &FixtureDefaults {
        &self.defaults
    }

    /// Build a signed envelope for `request` and return it with its effective tx id.
    pub fn build_signed_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<(Envelope, String), BuildError> {
        let creator = self.signer.serialize()?;

        let (proposal, tx_id) = match request.tx_id.as_deref() {
            None => self.propose_with_derived_tx_id(request, &creator)?,
            Some(tx_id) => self.propose_with_tx_id(request, tx_id, &creator)?,
        };

        let envelope = self.endorse_and_sign(&proposal, request)?;
        tracing::debug!(
            tx_id = %tx_id,
            channel_id = %request.channel_id,
            chaincode = %request.chaincode_id.name,
            "built signed transaction"
        );
        Ok((envelope, tx_id))
    }

    /// Like `build_signed_transaction`, pairing the result with its private writes.
    pub fn build_tx_and_pvt_data(
        &self,
        request: &TransactionRequest,
        pvt_rwset: Option<TxPvtReadWriteSet>,
    ) -> Result<TxAndPvtData, BuildError> {
        let (envelope, tx_id) = self.build_signed_transaction(request)?;
        Ok(TxAndPvtData {
            tx_id,
            envelope,
            pvt_rwset,
        })
    }

    /// Envelope over `simulation_results` with every other field taken from the defaults.
    pub fn construct_transaction(
        &self,
        tx_id: Option<&str>,
        simulation_results: &[u8],
    ) -> Result<Envelope, BuildError> {
        let request = self.defaults.request(simulation_results, tx_id)?;
        self.build_signed_transaction(&request)
            .map(|(envelope, _)| envelope)
    }

    // The tx id is the hash of the fresh nonce and the creator, so it is fixed
    // by those two inputs alone.
    fn propose_with_derived_tx_id(
        &self,
        request: &TransactionRequest,
        creator: &[u8],
    ) -> Result<(Proposal, String), BuildError> {
        let nonce = self.nonces.nonce()?;
        let tx_id = compute_tx_id(&nonce, creator);
        let proposal = self.create_proposal(request, &tx_id, &nonce, creator)?;
        Ok((proposal, tx_id))
    }

    // The caller's tx id is kept as is; only the nonce is fresh.
    fn propose_with_tx_id(
        &self,
        request: &TransactionRequest,
        tx_id: &str,
        creator: &[u8],
    ) -> Result<(Proposal, String), BuildError> {
        let nonce = self.nonces.nonce()?;
        let proposal = self.create_proposal(request, tx_id, &nonce, creator)?;
        Ok((proposal, tx_id.to_string()))
    }

    fn create_proposal(
        &self,
        request: &TransactionRequest,
        tx_id: &str,
        nonce: &[u8],
        creator: &[u8],
    ) -> Result<Proposal, BuildError> {
        Ok(proposal::create_chaincode_proposal(
            tx_id,
            request.header_type,
            &request.channel_id,
            &proposal::invocation_spec(&request.chaincode_id),
            nonce,
            creator,
            self.clock.now(),
        )?)
    }

    fn endorse_and_sign(
        &self,
        proposal: &Proposal,
        request: &TransactionRequest,
    ) -> Result<Envelope, BuildError> {
        let response = proposal::create_proposal_response(
            proposal,
            request.response.clone(),
            &request.simulation_results,
            request.events.as_deref().unwrap_or_default(),
            &request.chaincode_id,
            self.signer.as_ref(),
        )?;
        assemble_signed_envelope(proposal, self.signer.as_ref(), &[response])
    }
}

/// Envelope over `simulation_results` for the default dummy chaincode, signed by the stub.
pub fn construct_transaction(
    tx_id: Option<&str>,
    simulation_results: &[u8],
) -> Result<Envelope, BuildError> {
    TransactionBuilder::default().construct_transaction(tx_id, simulation_results)
}

/// Private read-write set from `(namespace, collection, rwset)` entries.
/// Namespaces keep the order of their first appearance.
pub fn pvt_rwset(entries: &[(&str, &str, &[u8])]) -> TxPvtReadWriteSet {
    let mut namespaces: Vec<NsPvtReadWriteSet> = Vec::new();
    for (namespace, collection, rwset) in entries {
        let collection = CollectionPvtReadWriteSet {
            collection_name: collection.to_string(),
            rwset: rwset.to_vec(),
        };
        match namespaces.iter_mut().find(|ns| ns.namespace == *namespace) {
            Some(ns) => ns.collection_pvt_rwset.push(collection),
            None => namespaces.push(NsPvtReadWriteSet {
                namespace: namespace.to_string(),
                collection_pvt_rwset: vec![collection],
            }),
        }
    }
    TxPvtReadWriteSet {
        data_model: DataModel::Kv.into(),
        ns_pvt_rwset: namespaces,
    }
}

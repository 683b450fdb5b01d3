//! Compact private-data collection descriptors and their wire-level policy package.
#![forbid(unsafe_code)]

use std::{fs::File, path::Path};

use ledger_protocol::common::{
    collection_config, collection_policy_config, CollectionConfig, CollectionConfigPackage,
    CollectionPolicyConfig, StaticCollectionConfig,
};
use ledger_protocol::msp::MspRole;
use prost::Message;
use serde::Deserialize;
use thiserror::Error;

pub mod dsl;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to encode collection config package: {0}")]
    Encode(#[from] prost::EncodeError),
    #[error("failed to decode collection config package: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("failed to read descriptors: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse descriptors: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A collection as a test writes it: name, block-to-live and member orgs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionDescriptor {
    pub name: String,
    pub time_to_live: u64,
    pub members: Vec<String>,
}

impl CollectionDescriptor {
    pub fn new(name: impl Into<String>, time_to_live: u64, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            time_to_live,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// A policy principal, which fixtures carry in one of two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    /// A marshalled role, as written by a real ledger.
    Role(MspRole),
    /// Org id bytes used directly as the principal.
    Raw(Vec<u8>),
}

impl Principal {
    pub fn parse(bytes: &[u8]) -> Self {
        match MspRole::decode(bytes) {
            Ok(role) => Principal::Role(role),
            Err(_) => Principal::Raw(bytes.to_vec()),
        }
    }

    pub fn org_id(&self) -> String {
        match self {
            Principal::Role(role) => role.msp_identifier.clone(),
            Principal::Raw(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Build the wire package for `descriptors`, preserving their order.
pub fn to_package(descriptors: &[CollectionDescriptor]) -> CollectionConfigPackage {
    CollectionConfigPackage {
        config: descriptors
            .iter()
            .map(|descriptor| CollectionConfig {
                payload: Some(collection_config::Payload::StaticCollectionConfig(
                    StaticCollectionConfig {
                        name: descriptor.name.clone(),
                        block_to_live: descriptor.time_to_live,
                        member_orgs_policy: Some(member_orgs_policy(&descriptor.members)),
                        ..Default::default()
                    },
                )),
            })
            .collect(),
    }
}

/// Serialize `descriptors` as a collection config package.
pub fn encode(descriptors: &[CollectionDescriptor]) -> Result<Vec<u8>, PolicyError> {
    let package = to_package(descriptors);
    let mut buf = Vec::with_capacity(package.encoded_len());
    package.encode(&mut buf)?;
    tracing::debug!(
        collections = descriptors.len(),
        bytes = buf.len(),
        "encoded collection package"
    );
    Ok(buf)
}

/// Recover descriptors from a package. Only the member list is read back from
/// the policy; the rule shape is not reconstructed.
pub fn from_package(package: &CollectionConfigPackage) -> Vec<CollectionDescriptor> {
    let mut descriptors = Vec::with_capacity(package.config.len());
    for config in &package.config {
        let Some(config) = config.static_collection_config() else {
            tracing::warn!("skipping collection config without a static payload");
            continue;
        };
        descriptors.push(CollectionDescriptor {
            name: config.name.clone(),
            time_to_live: config.block_to_live,
            members: config
                .member_orgs_policy
                .as_ref()
                .map(members_from_policy)
                .unwrap_or_default(),
        });
    }
    descriptors
}

pub fn decode(bytes: &[u8]) -> Result<Vec<CollectionDescriptor>, PolicyError> {
    let package = CollectionConfigPackage::decode(bytes)?;
    Ok(from_package(&package))
}

/// Member policy for a collection: signed by identity 0 or identity 1.
///
/// The rule references indices 0 and 1 whatever the member count is. Policies
/// for one member (or more than two) are therefore not meaningful to a validator.
///
/// Members go out as raw bytes but are read back role-first, so a short id that
/// happens to parse as an `MspRole` (such as `"P1"`) decodes to an empty org id.
pub fn member_orgs_policy(members: &[String]) -> CollectionPolicyConfig {
    let identities = members.iter().map(|m| m.as_bytes().to_vec()).collect();
    CollectionPolicyConfig {
        payload: Some(collection_policy_config::Payload::SignaturePolicy(
            dsl::envelope(dsl::or(dsl::signed_by(0), dsl::signed_by(1)), identities),
        )),
    }
}

pub fn members_from_policy(policy: &CollectionPolicyConfig) -> Vec<String> {
    let Some(envelope) = policy.signature_policy() else {
        return Vec::new();
    };
    envelope
        .identities
        .iter()
        .map(|identity| Principal::parse(&identity.principal).org_id())
        .collect()
}

/// Read a YAML list of descriptors.
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<Vec<CollectionDescriptor>, PolicyError> {
    let file = File::open(path.as_ref())?;
    serde_yaml::from_reader(file).map_err(PolicyError::from)
}

use std::{fs::File, path::Path};

use ledger_protocol::common::HeaderType;
use ledger_protocol::peer::{ChaincodeId, Response};
use serde::Deserialize;

use crate::{BuildError, TransactionRequest};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChaincodeConfig {
    pub name: String,
    pub version: String,
}

/// Values used for every part of a transaction fixture a test does not care about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureDefaults {
    pub channel_id: String,
    pub chaincode: ChaincodeConfig,
    #[serde(default = "default_response_status")]
    pub response_status: i32,
    #[serde(default = "default_header_type")]
    pub header_type: String,
}

fn default_response_status() -> i32 {
    200
}

fn default_header_type() -> String {
    HeaderType::EndorserTransaction.as_str_name().to_string()
}

impl Default for FixtureDefaults {
    fn default() -> Self {
        Self {
            channel_id: "dummyChannel".to_string(),
            chaincode: ChaincodeConfig {
                name: "dummyCC".to_string(),
                version: "dummyVer".to_string(),
            },
            response_status: default_response_status(),
            header_type: default_header_type(),
        }
    }
}

impl FixtureDefaults {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let file = File::open(path.as_ref())?;
        serde_yaml::from_reader(file).map_err(BuildError::from)
    }

    pub fn header_type(&self) -> Result<HeaderType, BuildError> {
        HeaderType::from_str_name(&self.header_type)
            .ok_or_else(|| BuildError::UnknownHeaderType(self.header_type.clone()))
    }

    pub fn chaincode_id(&self) -> ChaincodeId {
        ChaincodeId {
            path: String::new(),
            name: self.chaincode.name.clone(),
            version: self.chaincode.version.clone(),
        }
    }

    /// Request for a transaction with these defaults around `simulation_results`.
    pub fn request(
        &self,
        simulation_results: &[u8],
        tx_id: Option<&str>,
    ) -> Result<TransactionRequest, BuildError> {
        Ok(TransactionRequest {
            channel_id: self.channel_id.clone(),
            chaincode_id: self.chaincode_id(),
            response: Response {
                status: self.response_status,
                ..Default::default()
            },
            simulation_results: simulation_results.to_vec(),
            tx_id: tx_id.map(str::to_string),
            events: None,
            visibility: None,
            header_type: self.header_type()?,
        })
    }
}

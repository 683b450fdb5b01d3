use std::{fs::File, path::Path};

use serde::Deserialize;

use crate::StoreAdminError;

/// How to reach a running document store instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConnectionConfig {
    pub address: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_max_retries() -> u32 {
    3
}

fn default_request_timeout_ms() -> u64 {
    35_000
}

impl StoreConnectionConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            username: String::new(),
            password: String::new(),
            max_retries: default_max_retries(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, StoreAdminError> {
        let file = File::open(path.as_ref())?;
        serde_yaml::from_reader(file).map_err(StoreAdminError::from)
    }
}

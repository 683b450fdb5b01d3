//! Shared fixtures for tests across the workspace.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use collection_policy::CollectionDescriptor;
use ledger_protocol::NONCE_SIZE;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use store_admin::{
    BindMount, StopFn, StoreAdminError, StoreCatalog, StoreConnectionConfig, StoreRunner,
};
use tx_builder::{
    pvt_rwset, BuildError, FixedClock, FixedNonceSource, FixtureDefaults, NonceError,
    NonceSource, TransactionBuilder, TxAndPvtData,
};

pub const FIXED_TIMESTAMP_SECONDS: i64 = 1_700_000_000;
pub const STORE_ADDRESS: &str = "127.0.0.1:5984";

/// Nonce source whose entropy is always exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNonceSource;

impl NonceSource for FailingNonceSource {
    fn nonce(&self) -> Result<Vec<u8>, NonceError> {
        Err(NonceError::Entropy("entropy source exhausted".to_string()))
    }
}

/// Reproducible nonce drawn from a seeded generator.
pub fn seeded_nonce(seed: u64) -> Vec<u8> {
    let mut nonce = vec![0u8; NONCE_SIZE];
    StdRng::seed_from_u64(seed).fill_bytes(&mut nonce);
    nonce
}

/// Builder whose envelopes depend only on their request.
pub fn make_deterministic_builder(seed: u64) -> TransactionBuilder {
    TransactionBuilder::new()
        .with_nonce_source(FixedNonceSource::new(seeded_nonce(seed)))
        .with_clock(FixedClock::at_seconds(FIXED_TIMESTAMP_SECONDS))
}

pub fn make_collection_descriptors() -> Vec<CollectionDescriptor> {
    vec![
        CollectionDescriptor::new("coll1", 0, &["Org1MSP", "Org2MSP"]),
        CollectionDescriptor::new("coll2", 10, &["Org2MSP", "Org3MSP"]),
    ]
}

/// Transaction on the default chaincode whose private writes touch every
/// `(namespace, collection)` pair given.
pub fn make_tx_and_pvtdata(
    builder: &TransactionBuilder,
    tx_id: &str,
    collections: &[(&str, &str)],
) -> Result<TxAndPvtData, BuildError> {
    let request = FixtureDefaults::default().request(tx_id.as_bytes(), Some(tx_id))?;
    let writes: Vec<(&str, &str, &[u8])> = collections
        .iter()
        .map(|(ns, coll)| (*ns, *coll, tx_id.as_bytes()))
        .collect();
    let pvt = (!writes.is_empty()).then(|| pvt_rwset(&writes));
    builder.build_tx_and_pvt_data(&request, pvt)
}

/// In-process stand-in for a document store, usable both as runner and catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    databases: Arc<Mutex<BTreeSet<String>>>,
    binds: Arc<Mutex<Vec<BindMount>>>,
    stops: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with_databases(names: &[&str]) -> Self {
        let store = Self::default();
        store.create_databases(names);
        store
    }

    pub fn create_databases(&self, names: &[&str]) {
        let mut databases = self.databases.lock().unwrap_or_else(|e| e.into_inner());
        databases.extend(names.iter().map(|name| name.to_string()));
    }

    pub fn databases(&self) -> Vec<String> {
        let databases = self.databases.lock().unwrap_or_else(|e| e.into_inner());
        databases.iter().cloned().collect()
    }

    pub fn binds(&self) -> Vec<BindMount> {
        self.binds.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl StoreRunner for MemoryStore {
    fn start(&self, binds: &[BindMount]) -> Result<(String, StopFn), StoreAdminError> {
        *self.binds.lock().unwrap_or_else(|e| e.into_inner()) = binds.to_vec();
        let stops = Arc::clone(&self.stops);
        Ok((
            STORE_ADDRESS.to_string(),
            Box::new(move || {
                stops.fetch_add(1, Ordering::SeqCst);
            }),
        ))
    }
}

impl StoreCatalog for MemoryStore {
    fn list_databases(
        &self,
        _config: &StoreConnectionConfig,
    ) -> Result<Vec<String>, StoreAdminError> {
        Ok(self.databases())
    }

    fn drop_database(
        &self,
        _config: &StoreConnectionConfig,
        name: &str,
    ) -> Result<bool, StoreAdminError> {
        let mut databases = self.databases.lock().unwrap_or_else(|e| e.into_inner());
        Ok(databases.remove(name))
    }
}

/// Write `body` to a per-process scratch file and return its path.
pub fn write_temp_file(name: &str, body: &str) -> std::io::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("ledger-fixtures-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    std::fs::write(&path, body)?;
    Ok(path)
}

pub fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("ledger-fixtures-{}", std::process::id()))
        .join(Path::new(name))
}

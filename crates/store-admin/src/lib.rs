//! Setup and teardown of the document store that state-database integration
//! tests run against. The store itself is driven through the collaborator
//! traits below; this crate only sequences the calls.
#![forbid(unsafe_code)]

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod config;

pub use config::StoreConnectionConfig;

pub const COUCH_DATA_DIR: &str = "/opt/couchdb/data";
pub const COUCH_LOCAL_CONFIG_DIR: &str = "/opt/couchdb/etc/local.d";

#[derive(Debug, Error)]
pub enum StoreAdminError {
    #[error("failed to start store: {0}")]
    Start(String),
    #[error("failed to list databases: {0}")]
    List(String),
    #[error("failed to drop database {name}: {reason}")]
    Drop { name: String, reason: String },
    #[error("store refused to drop database {0}")]
    DropRejected(String),
    #[error("failed to read store config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse store config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMount {
    pub host_path: PathBuf,
    pub container_path: String,
}

impl BindMount {
    pub fn new(host_path: impl Into<PathBuf>, container_path: impl Into<String>) -> Self {
        Self {
            host_path: host_path.into(),
            container_path: container_path.into(),
        }
    }
}

impl fmt::Display for BindMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_path.display(), self.container_path)
    }
}

/// Standard mounts: database files and `local.d` configuration overrides.
pub fn couch_db_binds(data_dir: &Path, local_config_dir: &Path) -> Vec<BindMount> {
    vec![
        BindMount::new(data_dir, COUCH_DATA_DIR),
        BindMount::new(local_config_dir, COUCH_LOCAL_CONFIG_DIR),
    ]
}

pub type StopFn = Box<dyn FnOnce() + Send>;

/// Launches a store instance and reports where it listens.
pub trait StoreRunner: Send + Sync {
    fn start(&self, binds: &[BindMount]) -> Result<(String, StopFn), StoreAdminError>;
}

/// Database listing and removal on a running store.
pub trait StoreCatalog: Send + Sync {
    fn list_databases(&self, config: &StoreConnectionConfig)
        -> Result<Vec<String>, StoreAdminError>;

    /// `Ok(false)` means the store answered but did not remove the database.
    fn drop_database(
        &self,
        config: &StoreConnectionConfig,
        name: &str,
    ) -> Result<bool, StoreAdminError>;
}

/// A started store. Stops it when dropped unless stopped explicitly first.
pub struct StoreHandle {
    address: String,
    stop: Option<StopFn>,
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("address", &self.address)
            .field("running", &self.stop.is_some())
            .finish()
    }
}

impl StoreHandle {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop.take() {
            tracing::debug!(address = %self.address, "stopping store");
            stop();
        }
    }
}

impl Drop for StoreHandle {
    fn drop(&mut self) {
        self.release();
    }
}

pub fn start_store(
    runner: &dyn StoreRunner,
    binds: &[BindMount],
) -> Result<StoreHandle, StoreAdminError> {
    let (address, stop) = runner.start(binds)?;
    tracing::debug!(address = %address, binds = binds.len(), "store started");
    Ok(StoreHandle {
        address,
        stop: Some(stop),
    })
}

/// System databases start with an underscore and are left alone.
pub fn is_application_database(name: &str) -> bool {
    !name.starts_with('_')
}

/// Drop every application database on the store, returning the names dropped.
/// Stops at the first failure; databases dropped before it stay dropped.
pub fn drop_all_databases(
    catalog: &dyn StoreCatalog,
    config: &StoreConnectionConfig,
) -> Result<Vec<String>, StoreAdminError> {
    let names = catalog.list_databases(config)?;
    let mut dropped = Vec::new();
    for name in names.into_iter().filter(|name| is_application_database(name)) {
        if !catalog.drop_database(config, &name)? {
            return Err(StoreAdminError::DropRejected(name));
        }
        dropped.push(name);
    }
    tracing::debug!(address = %config.address, count = dropped.len(), "dropped databases");
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    struct CountingRunner {
        stops: Arc<AtomicUsize>,
    }

    impl StoreRunner for CountingRunner {
        fn start(&self, binds: &[BindMount]) -> Result<(String, StopFn), StoreAdminError> {
            if binds.is_empty() {
                return Err(StoreAdminError::Start("no binds".to_string()));
            }
            let stops = Arc::clone(&self.stops);
            Ok((
                "127.0.0.1:5984".to_string(),
                Box::new(move || {
                    stops.fetch_add(1, Ordering::SeqCst);
                }),
            ))
        }
    }

    struct MemoryCatalog {
        databases: Mutex<BTreeSet<String>>,
        refuse: Option<&'static str>,
    }

    impl MemoryCatalog {
        fn with(names: &[&str]) -> Self {
            Self {
                databases: Mutex::new(names.iter().map(|n| n.to_string()).collect()),
                refuse: None,
            }
        }

        fn remaining(&self) -> Vec<String> {
            self.databases.lock().unwrap().iter().cloned().collect()
        }
    }

    impl StoreCatalog for MemoryCatalog {
        fn list_databases(
            &self,
            _config: &StoreConnectionConfig,
        ) -> Result<Vec<String>, StoreAdminError> {
            Ok(self.remaining())
        }

        fn drop_database(
            &self,
            _config: &StoreConnectionConfig,
            name: &str,
        ) -> Result<bool, StoreAdminError> {
            if self.refuse == Some(name) {
                return Ok(false);
            }
            Ok(self.databases.lock().unwrap().remove(name))
        }
    }

    fn runner() -> (CountingRunner, Arc<AtomicUsize>) {
        let stops = Arc::new(AtomicUsize::new(0));
        (
            CountingRunner {
                stops: Arc::clone(&stops),
            },
            stops,
        )
    }

    #[test]
    fn handle_stops_store_once_on_drop() {
        let (runner, stops) = runner();
        let binds = couch_db_binds(Path::new("/tmp/data"), Path::new("/tmp/local.d"));
        {
            let handle = start_store(&runner, &binds).expect("start");
            assert_eq!(handle.address(), "127.0.0.1:5984");
        }
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn explicit_stop_is_not_repeated_on_drop() {
        let (runner, stops) = runner();
        let binds = vec![BindMount::new("/tmp/data", COUCH_DATA_DIR)];
        start_store(&runner, &binds).expect("start").stop();
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn start_failure_is_surfaced() {
        let (runner, stops) = runner();
        assert!(matches!(
            start_store(&runner, &[]),
            Err(StoreAdminError::Start(_))
        ));
        assert_eq!(stops.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn binds_render_as_docker_volumes() {
        let binds = couch_db_binds(Path::new("/srv/couch"), Path::new("/srv/conf"));
        let rendered: Vec<String> = binds.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "/srv/couch:/opt/couchdb/data".to_string(),
                "/srv/conf:/opt/couchdb/etc/local.d".to_string(),
            ]
        );
    }

    #[test]
    fn drops_only_application_databases() {
        let catalog = MemoryCatalog::with(&[
            "_global_changes",
            "_replicator",
            "_users",
            "ledger1_",
            "ns$$coll",
        ]);
        let dropped = drop_all_databases(&catalog, &StoreConnectionConfig::new("127.0.0.1:5984"))
            .expect("drop all");
        assert_eq!(dropped, vec!["ledger1_".to_string(), "ns$$coll".to_string()]);
        assert_eq!(
            catalog.remaining(),
            vec!["_global_changes", "_replicator", "_users"]
        );
    }

    struct UnreachableCatalog {
        list_fails: bool,
    }

    impl StoreCatalog for UnreachableCatalog {
        fn list_databases(
            &self,
            _config: &StoreConnectionConfig,
        ) -> Result<Vec<String>, StoreAdminError> {
            if self.list_fails {
                return Err(StoreAdminError::List("connection refused".to_string()));
            }
            Ok(vec!["_users".to_string(), "ledger1_".to_string()])
        }

        fn drop_database(
            &self,
            _config: &StoreConnectionConfig,
            name: &str,
        ) -> Result<bool, StoreAdminError> {
            Err(StoreAdminError::Drop {
                name: name.to_string(),
                reason: "timeout".to_string(),
            })
        }
    }

    #[test]
    fn catalog_failures_abort_the_sweep() {
        let config = StoreConnectionConfig::new("x");
        assert!(matches!(
            drop_all_databases(&UnreachableCatalog { list_fails: true }, &config),
            Err(StoreAdminError::List(_))
        ));
        assert!(matches!(
            drop_all_databases(&UnreachableCatalog { list_fails: false }, &config),
            Err(StoreAdminError::Drop { name, .. }) if name == "ledger1_"
        ));
    }

    #[test]
    fn refused_drop_is_an_error() {
        let mut catalog = MemoryCatalog::with(&["a", "b"]);
        catalog.refuse = Some("b");
        let err = drop_all_databases(&catalog, &StoreConnectionConfig::new("x"))
            .expect_err("refused");
        assert!(matches!(err, StoreAdminError::DropRejected(name) if name == "b"));
        assert_eq!(catalog.remaining(), vec!["b".to_string()]);
    }
}

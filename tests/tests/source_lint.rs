use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const WIRE_CRATE: &str = "ledger-protocol";
const MESSAGE_DERIVES: &[&str] = &[
    "::prost::Message)]",
    "::prost::Oneof)]",
    "::prost::Enumeration)]",
];

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root.join("crates"))
        .into_iter()
        .filter_entry(|e| !matches!(e.file_name().to_str(), Some(".git") | Some("target")))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

fn in_wire_crate(path: &Path) -> bool {
    path.components()
        .any(|component| component.as_os_str() == WIRE_CRATE)
}

#[test]
fn wire_messages_are_only_derived_in_the_protocol_crate() {
    let mut offenders: Vec<(PathBuf, String)> = Vec::new();

    for path in rust_sources(&workspace_root()) {
        if in_wire_crate(&path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for derive in MESSAGE_DERIVES {
            if contents.contains(derive) {
                offenders.push((path.clone(), derive.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut message = String::from("found wire message derives outside ledger-protocol:\n");
        for (path, derive) in offenders {
            message.push_str(&format!("{} -> {}\n", path.display(), derive));
        }
        panic!("{}", message);
    }
}

#[test]
fn every_crate_forbids_unsafe_code() {
    let root = workspace_root();
    let mut missing = Vec::new();

    for path in rust_sources(&root) {
        if path.file_name().is_none_or(|name| name != "lib.rs") {
            continue;
        }
        let contents = fs::read_to_string(&path).expect("read crate root");
        if !contents.contains("#![forbid(unsafe_code)]") {
            missing.push(path);
        }
    }

    assert!(missing.is_empty(), "crate roots without forbid(unsafe_code): {missing:?}");
}

//! Compiled contract artifacts and their resolution.
//!
//! A migration names a contract by reference; the deployment side resolves
//! that reference to a compiled artifact on disk, once per invocation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier a migration names a contract by.
///
/// The reference is not owned or mutated by the migration; it is resolved
/// to a compiled artifact by whichever deployer executes the step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractRef(String);

impl ContractRef {
    /// Creates a reference to the contract with the given artifact name.
    pub fn new(name: impl Into<String>) -> Self {
        ContractRef(name.into())
    }

    /// The artifact name this reference resolves against.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContractRef {
    fn from(name: &str) -> Self {
        ContractRef::new(name)
    }
}

/// A compiled contract artifact as produced by the contract toolchain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Contract name; matches the artifact file stem.
    pub name: String,

    /// Hex-encoded contract script.
    pub script: String,

    /// Manifest describing the contract ABI and permissions.
    pub manifest: serde_json::Value,
}

impl ContractArtifact {
    /// Decodes the contract script.
    pub fn script_bytes(&self) -> Result<Vec<u8>> {
        let bytes = hex::decode(self.script.trim_start_matches("0x"))?;
        if bytes.is_empty() {
            return Err(Error::InvalidArtifact {
                name: self.name.clone(),
                reason: "empty script".to_string(),
            });
        }
        Ok(bytes)
    }
}

/// Resolves contract references against a directory of compiled artifacts.
///
/// Artifacts are stored one file per contract as `<dir>/<Name>.json`.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store over the given artifact directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store resolves against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves `contract` to its compiled artifact.
    pub fn resolve(&self, contract: &ContractRef) -> Result<ContractArtifact> {
        let path = self.dir.join(format!("{}.json", contract.name()));
        if !path.exists() {
            return Err(Error::ArtifactNotFound(contract.name().to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        let artifact: ContractArtifact = serde_json::from_str(&content)?;

        if artifact.name != contract.name() {
            return Err(Error::InvalidArtifact {
                name: contract.name().to_string(),
                reason: format!("artifact file names contract '{}'", artifact.name),
            });
        }

        // Surface an undecodable script at resolution time rather than at submit time
        artifact.script_bytes()?;

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifact(dir: &Path, name: &str, script: &str) {
        let artifact = serde_json::json!({
            "name": name,
            "script": script,
            "manifest": { "name": name, "abi": { "methods": [] } },
        });
        fs::write(
            dir.join(format!("{}.json", name)),
            serde_json::to_string_pretty(&artifact).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn resolves_artifact_by_name() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "ServerNft", "4e455500");

        let store = ArtifactStore::new(dir.path());
        let artifact = store.resolve(&ContractRef::from("ServerNft")).unwrap();
        assert_eq!(artifact.name, "ServerNft");
        assert_eq!(artifact.script_bytes().unwrap(), vec![0x4e, 0x45, 0x55, 0x00]);
    }

    #[test]
    fn accepts_0x_prefixed_scripts() {
        let artifact = ContractArtifact {
            name: "ServerNft".to_string(),
            script: "0x4e45".to_string(),
            manifest: serde_json::Value::Null,
        };
        assert_eq!(artifact.script_bytes().unwrap(), vec![0x4e, 0x45]);
    }

    #[test]
    fn missing_artifact_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let err = store.resolve(&ContractRef::from("ServerNft")).unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound(name) if name == "ServerNft"));
    }

    #[test]
    fn malformed_artifact_file_fails_resolution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ServerNft.json"), "not json").unwrap();

        let store = ArtifactStore::new(dir.path());
        let err = store.resolve(&ContractRef::from("ServerNft")).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn mismatched_contract_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "OtherNft", "4e45");
        fs::rename(
            dir.path().join("OtherNft.json"),
            dir.path().join("ServerNft.json"),
        )
        .unwrap();

        let store = ArtifactStore::new(dir.path());
        let err = store.resolve(&ContractRef::from("ServerNft")).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact { .. }));
    }

    #[test]
    fn empty_script_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "ServerNft", "");

        let store = ArtifactStore::new(dir.path());
        let err = store.resolve(&ContractRef::from("ServerNft")).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact { .. }));
    }
}

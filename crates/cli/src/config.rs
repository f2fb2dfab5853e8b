//! Configuration for the migration runner.
//!
//! Settings come from a TOML file with per-section defaults; command-line
//! flags override individual values after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint of the node that submits the deployment.
    pub rpc_endpoint: String,
    /// Basic-auth user for the RPC endpoint.
    pub rpc_user: Option<String>,
    /// Basic-auth password for the RPC endpoint.
    pub rpc_pass: Option<String>,
}

/// Artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory holding the compiled contract artifacts.
    pub dir: String,
}

/// Main runner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network configuration
    pub network: NetworkConfig,
    /// Artifact configuration
    pub artifacts: ArtifactConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_endpoint: "http://localhost:10332".to_string(),
            rpc_user: None,
            rpc_pass: None,
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: "artifacts".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_apply_when_file_is_missing() {
        let config = Config::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.network.rpc_endpoint, "http://localhost:10332");
        assert_eq!(config.artifacts.dir, "artifacts");
        assert!(config.network.rpc_user.is_none());
    }

    #[test]
    fn parses_partial_toml_with_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servernft.toml");
        fs::write(
            &path,
            r#"
[network]
rpc_endpoint = "http://seed1.example.org:10332"
rpc_user = "deployer"
rpc_pass = "secret"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.network.rpc_endpoint, "http://seed1.example.org:10332");
        assert_eq!(config.network.rpc_user.as_deref(), Some("deployer"));
        // unspecified section keeps its defaults
        assert_eq!(config.artifacts.dir, "artifacts");
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servernft.toml");
        fs::write(&path, "network = not-a-table").unwrap();

        assert!(Config::load(&path).is_err());
    }
}

//! ServerNft Deployment Library
//!
//! This crate provides the deployment tooling for the ServerNft contract,
//! including:
//! - Compiled contract artifact resolution
//! - Constructor parameter values
//! - The deployer seam over a node's transaction pipeline
//! - Versioned deployment migrations and their runner

pub mod artifact;
pub mod deployer;
pub mod migration;
pub mod parameter;
pub mod rpc;

// Re-export main types
pub use artifact::{ArtifactStore, ContractArtifact, ContractRef};
pub use deployer::{DeployedContract, Deployer};
pub use migration::{migrations, DeployServerNft, Migration, MigrationRunner};
pub use parameter::ContractParameter;
pub use rpc::RpcDeployer;

use thiserror::Error;

/// Result type for deployment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Deployment-related errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Invalid artifact '{name}': {reason}")]
    InvalidArtifact { name: String, reason: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Other error: {0}")]
    Other(String),
}

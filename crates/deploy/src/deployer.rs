//! The deployment seam between migrations and the transaction pipeline.

use crate::artifact::ContractRef;
use crate::parameter::ContractParameter;
use crate::Result;
use async_trait::async_trait;
use std::fmt;

/// What the transaction pipeline reports back for one contract creation.
///
/// Recorded for logging only; this layer keeps no bookkeeping of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    /// Hash of the contract creation transaction.
    pub tx_hash: String,

    /// Address the contract was created at.
    pub address: String,
}

impl fmt::Display for DeployedContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tx {})", self.address, self.tx_hash)
    }
}

/// Submits contract-creation transactions to a network.
///
/// Implementations own network selection, fee handling, signing and
/// confirmation waiting. Callers supply a contract reference and the
/// constructor arguments in the order the constructor expects; one call
/// results in one on-chain contract creation.
#[async_trait]
pub trait Deployer: Send + Sync {
    /// Deploys the referenced contract with the given constructor arguments.
    async fn deploy(
        &self,
        contract: &ContractRef,
        parameters: &[ContractParameter],
    ) -> Result<DeployedContract>;
}

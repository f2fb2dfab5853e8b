//! Versioned deployment steps and the runner that executes them.

use crate::artifact::ContractRef;
use crate::deployer::Deployer;
use crate::parameter::ContractParameter;
use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// Base URI the ServerNft token metadata is served from.
const SERVER_NFT_BASE_URI: &str =
    "https://my-json-server.typicode.com/abcoathup/samplenft/tokens/";

/// A versioned deployment step.
///
/// Steps hold no state across invocations; everything a step needs is fixed
/// at compile time or supplied through the deployer it runs against.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Position of this step in the deployment order.
    fn version(&self) -> u32;

    /// Short label used in logs.
    fn label(&self) -> &str;

    /// Performs the step's deployment calls.
    async fn run(&self, deployer: &dyn Deployer) -> Result<()>;
}

/// Deploys the ServerNft contract with its display name, symbol and token
/// metadata base URI.
pub struct DeployServerNft;

#[async_trait]
impl Migration for DeployServerNft {
    fn version(&self) -> u32 {
        2
    }

    fn label(&self) -> &str {
        "deploy_server_nft"
    }

    async fn run(&self, deployer: &dyn Deployer) -> Result<()> {
        let deployed = deployer
            .deploy(
                &ContractRef::from("ServerNft"),
                &[
                    ContractParameter::string("Server NFT"),
                    ContractParameter::string("NFT"),
                    ContractParameter::string(SERVER_NFT_BASE_URI),
                ],
            )
            .await?;

        info!(
            target: "servernft",
            address = %deployed.address,
            tx = %deployed.tx_hash,
            "ServerNft deployed"
        );
        Ok(())
    }
}

/// All deployment steps, in the order they run.
pub fn migrations() -> Vec<Box<dyn Migration>> {
    vec![Box::new(DeployServerNft)]
}

/// Executes deployment steps in ascending version order against one
/// deployer, failing fast on the first error.
///
/// The runner keeps no record of completed steps: running it again against
/// the same network deploys fresh contract instances.
pub struct MigrationRunner<D> {
    deployer: D,
    steps: Vec<Box<dyn Migration>>,
}

impl<D: Deployer> MigrationRunner<D> {
    /// Creates a runner over the registered deployment steps.
    pub fn new(deployer: D) -> Self {
        Self::with_steps(deployer, migrations())
    }

    /// Creates a runner over an explicit list of steps.
    pub fn with_steps(deployer: D, mut steps: Vec<Box<dyn Migration>>) -> Self {
        steps.sort_by_key(|step| step.version());
        Self { deployer, steps }
    }

    /// Runs every step once.
    pub async fn run_all(&self) -> Result<()> {
        for step in &self.steps {
            info!(
                target: "servernft",
                version = step.version(),
                label = step.label(),
                "running migration"
            );
            step.run(&self.deployer).await?;
        }

        info!(target: "servernft", steps = self.steps.len(), "migration run complete");
        Ok(())
    }
}

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use servernft_deploy::{ArtifactStore, MigrationRunner, RpcDeployer};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "servernft-cli",
    about = "ServerNft contract deployment command-line interface"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "servernft.toml", value_name = "PATH")]
    config: PathBuf,

    /// Overrides the configured RPC endpoint.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Overrides the configured artifact directory.
    #[arg(long, value_name = "PATH")]
    artifacts: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;

    if let Some(endpoint) = &cli.endpoint {
        config.network.rpc_endpoint = endpoint.clone();
    }

    if let Some(dir) = &cli.artifacts {
        config.artifacts.dir = dir.to_string_lossy().to_string();
    }

    let endpoint: Url = config
        .network
        .rpc_endpoint
        .parse()
        .with_context(|| format!("invalid rpc endpoint '{}'", config.network.rpc_endpoint))?;
    let artifacts = ArtifactStore::new(&config.artifacts.dir);

    let deployer = match (&config.network.rpc_user, &config.network.rpc_pass) {
        (Some(user), Some(pass)) => {
            RpcDeployer::with_basic_auth(endpoint.clone(), artifacts, user, pass)?
        }
        _ => RpcDeployer::new(endpoint.clone(), artifacts)?,
    };

    info!(
        target: "servernft",
        endpoint = %endpoint,
        artifacts = %config.artifacts.dir,
        "starting migration run"
    );

    MigrationRunner::new(deployer).run_all().await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,servernft=info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

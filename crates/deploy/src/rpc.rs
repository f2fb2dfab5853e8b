// Copyright (C) 2015-2025 The Neo Project.
//
// rpc.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC backed deployer.
//!
//! Delegates the whole transaction pipeline to a node: the node calculates
//! fees, signs with its open wallet and waits for confirmation. This client
//! resolves the named artifact, submits one `deploycontract` request and
//! reports what the node answered. Failures propagate as-is; nothing is
//! retried here.

use crate::artifact::{ArtifactStore, ContractRef};
use crate::deployer::{DeployedContract, Deployer};
use crate::parameter::ContractParameter;
use crate::{Error, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

/// JSON-RPC request envelope
#[derive(Debug, Clone, Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: u32,
    method: String,
    params: Vec<serde_json::Value>,
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcResponseError>,
}

#[derive(Debug, Clone, Deserialize)]
struct RpcResponseError {
    code: i64,
    message: String,
}

/// Result payload of a `deploycontract` call
#[derive(Debug, Clone, Deserialize)]
struct RpcDeployResult {
    hash: String,
    address: String,
}

/// Deploys contracts by delegating to a node's JSON-RPC interface.
pub struct RpcDeployer {
    endpoint: Url,
    http_client: Client,
    artifacts: ArtifactStore,
}

impl RpcDeployer {
    /// Creates a deployer talking to the given endpoint.
    pub fn new(endpoint: Url, artifacts: ArtifactStore) -> Result<Self> {
        Ok(Self {
            endpoint,
            http_client: Client::builder().build()?,
            artifacts,
        })
    }

    /// Creates a deployer that authenticates with HTTP basic auth.
    pub fn with_basic_auth(
        endpoint: Url,
        artifacts: ArtifactStore,
        user: &str,
        pass: &str,
    ) -> Result<Self> {
        let auth = format!("{}:{}", user, pass);
        let encoded = general_purpose::STANDARD.encode(auth.as_bytes());

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Basic {}", encoded)
                .parse()
                .map_err(|_| Error::Other("invalid basic auth credentials".to_string()))?,
        );

        Ok(Self {
            endpoint,
            http_client: Client::builder().default_headers(headers).build()?,
            artifacts,
        })
    }

    async fn send(&self, method: &str, params: Vec<serde_json::Value>) -> Result<serde_json::Value> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: method.to_string(),
            params,
        };

        debug!(target: "servernft", method, "sending rpc request");

        let response: RpcResponse = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        response
            .result
            .ok_or_else(|| Error::MalformedResponse("missing result".to_string()))
    }
}

#[async_trait]
impl Deployer for RpcDeployer {
    async fn deploy(
        &self,
        contract: &ContractRef,
        parameters: &[ContractParameter],
    ) -> Result<DeployedContract> {
        let artifact = self.artifacts.resolve(contract)?;
        let script = artifact.script_bytes()?;

        info!(
            target: "servernft",
            contract = %contract,
            parameters = parameters.len(),
            "submitting contract deployment"
        );

        let params = vec![
            serde_json::Value::String(general_purpose::STANDARD.encode(&script)),
            artifact.manifest.clone(),
            serde_json::Value::Array(parameters.iter().map(|p| p.to_json()).collect()),
        ];

        let result = self.send("deploycontract", params).await?;
        let deployed: RpcDeployResult = serde_json::from_value(result)?;

        info!(
            target: "servernft",
            contract = %contract,
            address = %deployed.address,
            "contract deployed"
        );

        Ok(DeployedContract {
            tx_hash: deployed.hash,
            address: deployed.address,
        })
    }
}

//! JSON-RPC client for the EOS command API.
//!
//! One request per `runCmds` call, HTTP basic auth, blocking. No retry: a
//! transport failure is fatal to the caller's run, and retry policy belongs
//! above this layer if anywhere.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::types::Connection;

/// Operations the resource kinds need from a device connection.
///
/// `show` must be side-effect free; `config` enters configuration mode and
/// applies the given commands in order. Tests implement this trait with a
/// recording mock instead of a live device.
pub trait EosApi {
    /// Run one show command and return its JSON output.
    fn show(&self, command: &str) -> Result<Value>;

    /// Apply configuration commands in order.
    fn config(&self, commands: &[String]) -> Result<()>;
}

/// Blocking eAPI client over HTTP(S).
pub struct EapiClient {
    agent: ureq::Agent,
    endpoint: String,
    authorization: String,
}

impl EapiClient {
    /// Create a client for the given connection parameters.
    pub fn new(conn: &Connection) -> Self {
        Self::with_endpoint(conn, conn.endpoint())
    }

    /// Create a client with an explicit endpoint URL (for testing).
    pub fn with_endpoint(conn: &Connection, endpoint: String) -> Self {
        let credentials = BASE64.encode(format!("{}:{}", conn.username, conn.password));
        Self {
            agent: ureq::Agent::new_with_defaults(),
            endpoint,
            authorization: format!("Basic {credentials}"),
        }
    }

    /// The endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a sequence of commands in one eAPI transaction.
    ///
    /// Returns one JSON result object per command, in command order.
    pub fn run_cmds(&self, cmds: &[String], format: &str) -> Result<Vec<Value>> {
        let body = request_body(cmds, format);

        let response: RpcResponse = self
            .agent
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.authorization)
            .send_json(&body)?
            .body_mut()
            .read_json()?;

        parse_response(response, cmds.len())
    }
}

impl EosApi for EapiClient {
    fn show(&self, command: &str) -> Result<Value> {
        let mut results = self.run_cmds(&[command.to_string()], "json")?;
        Ok(results.remove(0))
    }

    fn config(&self, commands: &[String]) -> Result<()> {
        let mut cmds = Vec::with_capacity(commands.len() + 1);
        cmds.push("configure".to_string());
        cmds.extend_from_slice(commands);
        self.run_cmds(&cmds, "json")?;
        Ok(())
    }
}

/// Build the JSON-RPC request body for a `runCmds` call.
fn request_body(cmds: &[String], format: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "runCmds",
        "params": {
            "version": 1,
            "cmds": cmds,
            "format": format,
        },
        "id": "eosctl",
    })
}

/// Check a decoded response for the error member and result arity.
fn parse_response(response: RpcResponse, expected: usize) -> Result<Vec<Value>> {
    if let Some(error) = response.error {
        return Err(Error::Command {
            code: error.code,
            message: error.message,
        });
    }
    let result = response
        .result
        .ok_or_else(|| Error::InvalidResponse("missing result member".to_string()))?;
    if result.len() != expected {
        return Err(Error::InvalidResponse(format!(
            "expected {expected} results, got {}",
            result.len()
        )));
    }
    Ok(result)
}

// =============================================================================
// JSON-RPC response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Vec<Value>>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

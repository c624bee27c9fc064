//! Connection parameter types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport used to reach the device's command API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Http,
    Https,
}

impl Transport {
    /// URL scheme for this transport.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Port used when the connection does not specify one.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::Https
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme())
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(format!("unknown transport '{other}'")),
        }
    }
}

/// Parameters for one device connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Hostname or address of the device.
    pub host: String,
    /// Username for HTTP basic auth.
    pub username: String,
    /// Password for HTTP basic auth.
    pub password: String,
    /// Port override; defaults per transport.
    #[serde(default)]
    pub port: Option<u16>,
    /// HTTP or HTTPS.
    #[serde(default)]
    pub transport: Transport,
}

impl Connection {
    /// The command API endpoint URL for this connection.
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}:{}/command-api",
            self.transport.scheme(),
            self.host,
            self.port.unwrap_or_else(|| self.transport.default_port()),
        )
    }
}

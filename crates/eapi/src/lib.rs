//! # eapi
//!
//! A blocking JSON-RPC client for the EOS command API.
//!
//! This crate owns everything about talking to a device: connection
//! parameters and profiles, the HTTP transport, and the `runCmds` wire
//! protocol. Callers that only need to run commands program against the
//! [`EosApi`] trait, which keeps them testable against a mock.
//!
//! ## Example
//!
//! ```no_run
//! use eapi::{Connection, EapiClient, EosApi, Transport};
//!
//! let conn = Connection {
//!     host: "sw1.example.net".to_string(),
//!     username: "admin".to_string(),
//!     password: "admin".to_string(),
//!     port: None,
//!     transport: Transport::Https,
//! };
//! let client = EapiClient::new(&conn);
//! let vlans = client.show("show vlan")?;
//! println!("{vlans}");
//! # Ok::<(), eapi::Error>(())
//! ```

mod client;
mod error;
mod profiles;
mod types;

pub use client::{EapiClient, EosApi};
pub use error::{Error, Result};
pub use profiles::{Profiles, config_path};
pub use types::{Connection, Transport};

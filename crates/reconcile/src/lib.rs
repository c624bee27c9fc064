//! # Reconcile
//!
//! A resource-agnostic reconciliation engine for network device resources.
//!
//! An operator declares the desired configuration of a resource (a VLAN, a
//! switchport, an IP interface); the engine reads the live state through a
//! connection handle, computes the minimal attribute-level changeset, and
//! applies only what differs. Idempotent by construction: a second run with
//! the same desired state reports no changes.
//!
//! ## Core Concepts
//!
//! - **[`Desired`]**: the attribute values an operator wants, built once per
//!   run by [`mapper::map_params`] and immutable thereafter
//! - **[`Observed`]**: the resource as it currently exists on the device,
//!   refetched (never patched) after every mutation
//! - **[`ResourceKind`]**: a per-kind capability table holding the fetch,
//!   create, remove, validator and setter routines, checked at construction
//! - **[`Reconciler`]**: the state machine that decides create, remove or
//!   configure, and orchestrates application
//! - **[`Report`]**: `{changed, created, removed, changes, instance}`
//!
//! ## Example
//!
//! ```ignore
//! use reconcile::{mapper, Param, Reconciler, ResourceKind};
//!
//! let kind: ResourceKind<Client> = ResourceKind::build("vlan", "vlanid", fetch)
//!     .lifecycle(create, remove)
//!     .validator("vlanid", validate_vlanid)
//!     .setter("name", set_name)
//!     .finish()?;
//!
//! let desired = mapper::map_params(
//!     vec![
//!         ("vlanid".to_string(), Param::from(100i64)),
//!         ("name".to_string(), Param::from("engineering")),
//!     ],
//!     &[],
//! )?;
//!
//! let report = Reconciler::new(&kind, &client).run(&desired)?;
//! assert!(report.changed);
//! ```
//!
//! The engine performs no I/O of its own; every device interaction goes
//! through the routines in the kind table, all of which receive the
//! caller-supplied connection handle. One resource per invocation, strictly
//! sequential: fetch, decide, apply, refetch.

pub mod apply;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod kind;
pub mod mapper;
pub mod report;
pub mod types;
pub mod validate;

// Re-export main types at crate root
pub use engine::Reconciler;
pub use error::{Error, Result};
pub use kind::{FetchFn, KindBuilder, LifecycleFn, ResourceKind, SetterFn, ValidateFn};
pub use report::Report;
pub use types::{Changeset, Desired, Observed, Param, State};

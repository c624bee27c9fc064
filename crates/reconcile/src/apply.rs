//! Change applier
//!
//! Applies a changeset attribute by attribute through the kind's setter
//! table. Setters are assumed idempotent and attribute-disjoint, so any
//! application order yields the same end state.

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::kind::ResourceKind;
use crate::types::{Changeset, Desired};

/// Apply a changeset and return the `changes` mapping for the report.
///
/// Every changeset entry is recorded, with or without dry-run, so a dry run
/// still tells the operator exactly what would change. A key with no
/// registered setter is recorded but never applied; in strict mode
/// (`require_setters`) that condition aborts before any setter runs.
pub fn apply<C>(
    kind: &ResourceKind<C>,
    conn: &C,
    desired: &Desired,
    changeset: Changeset,
    dry_run: bool,
) -> Result<BTreeMap<String, String>> {
    if kind.require_setters() {
        for (attr, _) in changeset.iter() {
            if kind.setter_for(attr).is_none() {
                return Err(Error::capability(
                    kind.name(),
                    format!("no setter registered for changed attribute {attr}"),
                ));
            }
        }
    }

    let mut applied = 0usize;
    for (attr, value) in changeset.iter() {
        match kind.setter_for(attr) {
            Some(set) if !dry_run => {
                debug!("{}: set {attr} = {value}", kind.name());
                // No rollback: a failure here leaves the resource partially
                // configured, and the caller must hear about it.
                set(conn, desired, value).inspect_err(|_| {
                    warn!(
                        "{}: setting {attr} failed after {applied} change(s) were applied; \
                         resource may be partially configured",
                        kind.name()
                    );
                })?;
                applied += 1;
            }
            Some(_) => debug!("{}: would set {attr} = {value}", kind.name()),
            None => warn!(
                "{}: no setter for {attr}; change recorded but not applied",
                kind.name()
            ),
        }
    }

    Ok(changeset.into_map())
}

//! Run report
//!
//! The caller-facing outcome of one reconciliation: whether anything
//! changed, the attribute-level changes, and the final observed instance
//! refetched after all actions.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::Observed;

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// True if a create/remove occurred or any attribute was changed.
    pub changed: bool,
    /// True if this run created the resource.
    pub created: bool,
    /// True if this run removed the resource.
    pub removed: bool,
    /// Attribute-level changes applied (or, under dry-run, pending).
    pub changes: BTreeMap<String, String>,
    /// The resource as observed after the final refresh.
    pub instance: Observed,
}

impl Report {
    /// An unchanged report around the given instance.
    pub fn unchanged(instance: Observed) -> Self {
        Self {
            changed: false,
            created: false,
            removed: false,
            changes: BTreeMap::new(),
            instance,
        }
    }

    /// True when the run had no effect at all; a second run of an already
    /// converged resource must report this.
    pub fn is_noop(&self) -> bool {
        !self.changed && !self.created && !self.removed && self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_report() {
        let report = Report::unchanged(Observed::absent());
        assert!(report.is_noop());
    }

    #[test]
    fn test_serializes_all_keys() {
        let report = Report::unchanged(Observed::absent());
        let json = serde_json::to_value(&report).unwrap();
        for key in ["changed", "created", "removed", "changes", "instance"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}

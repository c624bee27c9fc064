//! Core types for reconciliation
//!
//! All attribute values are normalized to a canonical string form before any
//! comparison, so a desired `10` and an observed `"10"` never produce a
//! spurious change.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle state of a resource, desired or observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Resource exists / should exist
    Present,
    /// Resource does not exist / should not exist
    Absent,
}

impl State {
    /// Check if state represents presence
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    /// Check if state represents absence
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(Error::validation(
                "state",
                format!("expected 'present' or 'absent', got '{other}'"),
            )),
        }
    }
}

/// A raw input parameter value before normalization.
///
/// Callers hand the mapper whatever shape their surface produced; the mapper
/// renders everything into the canonical string form used for diffing.
/// `Null` means "unspecified, leave unmanaged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Param {
    /// Canonical string form, or `None` for a null value.
    pub fn normalize(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null => None,
        }
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u16> for Param {
    fn from(v: u16) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// The desired attribute set for one reconciliation run.
///
/// Built once by the mapper and immutable thereafter. Connection parameters
/// and `state` are carried but marked as meta keys so they never reach the
/// changeset.
#[derive(Debug, Clone)]
pub struct Desired {
    attrs: BTreeMap<String, Option<String>>,
    meta: Vec<String>,
    state: State,
}

impl Desired {
    pub(crate) fn new(
        attrs: BTreeMap<String, Option<String>>,
        meta: Vec<String>,
        state: State,
    ) -> Self {
        Self { attrs, meta, state }
    }

    /// Desired lifecycle state (`present` unless the caller asked otherwise).
    pub fn state(&self) -> State {
        self.state
    }

    /// Look up an attribute's normalized value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Option::as_deref)
    }

    /// Look up a required attribute, typically the resource identity.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::validation(key, "required attribute is missing"))
    }

    /// Iterate every (key, value) pair with a non-null value, in key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Iterate the managed pairs: non-null, not `state`, not a meta key.
    ///
    /// Only these participate in changeset computation.
    pub fn managed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values()
            .filter(|(k, _)| *k != "state" && !self.meta.iter().any(|m| m == k))
    }
}

/// The resource as it currently exists on the device.
///
/// `state` is `absent` when the resource does not exist at all, in which case
/// `attrs` is empty. Never patched incrementally: any component that mutated
/// the device must refetch before reading again.
#[derive(Debug, Clone, Serialize)]
pub struct Observed {
    pub state: State,
    #[serde(flatten)]
    pub attrs: BTreeMap<String, String>,
}

impl Observed {
    /// An instance for a resource that does not exist on the device.
    pub fn absent() -> Self {
        Self {
            state: State::Absent,
            attrs: BTreeMap::new(),
        }
    }

    /// An instance for an existing resource with the given attributes.
    pub fn present(attrs: BTreeMap<String, String>) -> Self {
        Self {
            state: State::Present,
            attrs,
        }
    }

    /// Look up an observed attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Set one observed attribute (used by fetch routines while building).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }
}

/// The minimal set of attribute changes needed to move observed state toward
/// desired state. Transient: computed once per pass and discarded after
/// application.
#[derive(Debug, Clone, Default)]
pub struct Changeset(BTreeMap<String, String>);

impl Changeset {
    /// Compute the changeset between a desired set and an observed instance.
    ///
    /// An attribute is included iff it is managed (non-null, not `state`,
    /// not a meta key) and its value differs from the observed entry under
    /// exact equality of the normalized forms. Attributes absent from the
    /// desired set never appear.
    pub fn compute(desired: &Desired, observed: &Observed) -> Self {
        let mut changes = BTreeMap::new();
        for (key, value) in desired.managed() {
            if observed.get(key) != Some(value) {
                changes.insert(key.to_string(), value.to_string());
            }
        }
        Self(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the pending (attribute, desired value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the changeset into the report's `changes` mapping.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

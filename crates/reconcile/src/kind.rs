//! Resource kind capability tables
//!
//! A [`ResourceKind`] is the engine-facing definition of one kind of device
//! resource: its identity attribute, lifecycle capabilities, and the fetch,
//! create, remove, validator and setter routines the engine dispatches to.
//! Tables are resolved at construction time so a misdefined kind fails at
//! startup, not in the middle of a run against a live device.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::{Desired, Observed};

/// Retrieves the observed instance. Must not mutate device state and must
/// report an absent resource as [`Observed::absent`], not as an error.
pub type FetchFn<C> = fn(&C, &Desired) -> Result<Observed>;

/// Creates or removes the resource on the device.
pub type LifecycleFn<C> = fn(&C, &Desired) -> Result<()>;

/// Applies one attribute's desired value. Must be idempotent and must affect
/// only that attribute.
pub type SetterFn<C> = fn(&C, &Desired, &str) -> Result<()>;

/// Checks one attribute value, returning a human-readable reason on
/// rejection. The engine wraps the reason with the attribute name.
pub type ValidateFn = fn(&str) -> std::result::Result<(), String>;

/// Capability table for one resource kind, generic over the connection
/// handle type `C`.
#[derive(Debug)]
pub struct ResourceKind<C> {
    name: &'static str,
    identity: &'static str,
    supports_state: bool,
    require_setters: bool,
    fetch: FetchFn<C>,
    create: Option<LifecycleFn<C>>,
    remove: Option<LifecycleFn<C>>,
    validators: BTreeMap<&'static str, ValidateFn>,
    setters: BTreeMap<&'static str, SetterFn<C>>,
}

impl<C> ResourceKind<C> {
    /// Start building a kind. `identity` names the attribute that addresses
    /// the resource on the device; `fetch` is mandatory for every kind.
    pub fn build(name: &'static str, identity: &'static str, fetch: FetchFn<C>) -> KindBuilder<C> {
        KindBuilder {
            kind: Self {
                name,
                identity,
                supports_state: false,
                require_setters: false,
                fetch,
                create: None,
                remove: None,
                validators: BTreeMap::new(),
                setters: BTreeMap::new(),
            },
        }
    }

    /// Kind name, used in reports and capability errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the identity attribute.
    pub fn identity(&self) -> &'static str {
        self.identity
    }

    /// Whether the absent/present lifecycle applies to this kind at all.
    pub fn supports_state(&self) -> bool {
        self.supports_state
    }

    /// Whether a changed attribute without a setter aborts the run.
    pub fn require_setters(&self) -> bool {
        self.require_setters
    }

    pub(crate) fn fetch(&self, conn: &C, desired: &Desired) -> Result<Observed> {
        (self.fetch)(conn, desired)
    }

    pub(crate) fn create(&self, conn: &C, desired: &Desired) -> Result<()> {
        let create = self
            .create
            .ok_or_else(|| Error::capability(self.name, "create routine missing"))?;
        create(conn, desired)
    }

    pub(crate) fn remove(&self, conn: &C, desired: &Desired) -> Result<()> {
        let remove = self
            .remove
            .ok_or_else(|| Error::capability(self.name, "remove routine missing"))?;
        remove(conn, desired)
    }

    pub(crate) fn validator_for(&self, attr: &str) -> Option<&ValidateFn> {
        self.validators.get(attr)
    }

    pub(crate) fn setter_for(&self, attr: &str) -> Option<&SetterFn<C>> {
        self.setters.get(attr)
    }
}

/// Builder for [`ResourceKind`] tables.
///
/// `finish` enforces the capability invariants: a kind without lifecycle
/// support may not carry create/remove routines, and a kind with lifecycle
/// support must carry both.
pub struct KindBuilder<C> {
    kind: ResourceKind<C>,
}

impl<C> KindBuilder<C> {
    /// Declare that the absent/present lifecycle applies and supply the
    /// create and remove routines.
    pub fn lifecycle(mut self, create: LifecycleFn<C>, remove: LifecycleFn<C>) -> Self {
        self.kind.supports_state = true;
        self.kind.create = Some(create);
        self.kind.remove = Some(remove);
        self
    }

    /// Declare lifecycle support without supplying routines.
    ///
    /// Only useful in tests of the capability checks; `finish` will reject
    /// the table.
    #[cfg(test)]
    pub fn lifecycle_unimplemented(mut self) -> Self {
        self.kind.supports_state = true;
        self
    }

    /// Register a validator for an attribute.
    pub fn validator(mut self, attr: &'static str, validate: ValidateFn) -> Self {
        self.kind.validators.insert(attr, validate);
        self
    }

    /// Register a setter for an attribute.
    pub fn setter(mut self, attr: &'static str, set: SetterFn<C>) -> Self {
        self.kind.setters.insert(attr, set);
        self
    }

    /// Reject changed attributes that have no registered setter instead of
    /// silently recording them. Off by default.
    pub fn require_setters(mut self) -> Self {
        self.kind.require_setters = true;
        self
    }

    /// Validate the capability invariants and produce the finished table.
    pub fn finish(self) -> Result<ResourceKind<C>> {
        let kind = self.kind;
        if kind.supports_state {
            if kind.create.is_none() {
                return Err(Error::capability(kind.name, "create routine missing"));
            }
            if kind.remove.is_none() {
                return Err(Error::capability(kind.name, "remove routine missing"));
            }
        } else if kind.create.is_some() || kind.remove.is_some() {
            return Err(Error::capability(
                kind.name,
                "create/remove supplied for a kind without lifecycle support",
            ));
        }
        Ok(kind)
    }
}

//! The reconciler state machine
//!
//! One run: validate the desired set, fetch the observed instance, pick a
//! branch from the transition table, apply it, refetch, report.
//!
//! | desired | observed | lifecycle | action                      |
//! |---------|----------|-----------|-----------------------------|
//! | present | absent   | yes       | create, refresh, configure  |
//! | present | present  | any       | configure                   |
//! | absent  | present  | yes       | remove                      |
//! | absent  | absent   | yes       | no-op                       |
//! | any     | any      | no        | configure                   |
//!
//! Within one run: fetch precedes decision, decision precedes apply, apply
//! precedes the final refresh. Nothing is reordered or batched.

use log::{debug, info};

use crate::apply;
use crate::error::Result;
use crate::fetch::StateCache;
use crate::kind::ResourceKind;
use crate::report::Report;
use crate::types::{Changeset, Desired, Observed, State};
use crate::validate;

/// Drives one resource kind toward its desired state over a connection
/// handle. Synchronous, single resource per invocation.
pub struct Reconciler<'a, C> {
    kind: &'a ResourceKind<C>,
    conn: &'a C,
    dry_run: bool,
}

impl<'a, C> Reconciler<'a, C> {
    pub fn new(kind: &'a ResourceKind<C>, conn: &'a C) -> Self {
        Self {
            kind,
            conn,
            dry_run: false,
        }
    }

    /// Compute and report changes without invoking any mutating routine.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run one reconciliation pass.
    pub fn run(&self, desired: &Desired) -> Result<Report> {
        validate::validate(self.kind, desired)?;

        let mut cache = StateCache::new(self.kind, self.conn);
        let observed_state = cache.get(desired)?.state;

        // Kinds without lifecycle support always take the configure branch.
        let desired_state = if self.kind.supports_state() {
            desired.state()
        } else {
            State::Present
        };

        let mut report = Report::unchanged(Observed::absent());

        match (desired_state, observed_state) {
            (State::Present, State::Absent) if self.kind.supports_state() => {
                info!("{}: creating", self.kind.name());
                if !self.dry_run {
                    self.kind.create(self.conn, desired)?;
                    cache.invalidate();
                }
                // Creation is always a real change, even if every attribute
                // lands on its default.
                report.created = true;
                report.changed = true;
                self.configure(desired, &mut cache, &mut report)?;
            }
            (State::Present, _) => {
                self.configure(desired, &mut cache, &mut report)?;
            }
            (State::Absent, State::Present) => {
                info!("{}: removing", self.kind.name());
                if !self.dry_run {
                    self.kind.remove(self.conn, desired)?;
                }
                // A removed resource has no attributes left to configure.
                report.removed = true;
                report.changed = true;
            }
            (State::Absent, State::Absent) => {
                debug!("{}: already absent", self.kind.name());
            }
        }

        // The reported instance always reflects the post-action device
        // state, whatever branch ran.
        cache.invalidate();
        report.instance = cache.get(desired)?.clone();
        Ok(report)
    }

    fn configure(
        &self,
        desired: &Desired,
        cache: &mut StateCache<'_, C>,
        report: &mut Report,
    ) -> Result<()> {
        let changeset = Changeset::compute(desired, cache.get(desired)?);
        if changeset.is_empty() {
            debug!("{}: nothing to configure", self.kind.name());
            return Ok(());
        }

        report.changed = true;
        report.changes = apply::apply(self.kind, self.conn, desired, changeset, self.dry_run)?;
        Ok(())
    }
}

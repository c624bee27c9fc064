//! Observed-state cache
//!
//! The engine never assumes the observed instance is fresh: any mutation
//! invalidates the cache, and the next read refetches from the device. The
//! fetch routine itself must be read-only and must report a missing resource
//! as absent rather than failing.

use crate::error::Result;
use crate::kind::ResourceKind;
use crate::types::{Desired, Observed};

/// Lazily fetched, explicitly invalidated view of the device state.
pub struct StateCache<'a, C> {
    kind: &'a ResourceKind<C>,
    conn: &'a C,
    cached: Option<Observed>,
}

impl<'a, C> StateCache<'a, C> {
    pub fn new(kind: &'a ResourceKind<C>, conn: &'a C) -> Self {
        Self {
            kind,
            conn,
            cached: None,
        }
    }

    /// The current observed instance, fetching on first use and after every
    /// invalidation.
    pub fn get(&mut self, desired: &Desired) -> Result<&Observed> {
        if self.cached.is_none() {
            self.cached = Some(self.kind.fetch(self.conn, desired)?);
        }
        Ok(self.cached.as_ref().unwrap())
    }

    /// Drop the cached instance; the next `get` refetches.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper;
    use crate::types::Param;
    use std::cell::Cell;

    struct CountingConn {
        fetches: Cell<usize>,
    }

    fn fetch(conn: &CountingConn, _: &Desired) -> Result<Observed> {
        conn.fetches.set(conn.fetches.get() + 1);
        Ok(Observed::absent())
    }

    #[test]
    fn test_fetch_is_lazy_and_cached() {
        let kind = ResourceKind::build("test", "name", fetch).finish().unwrap();
        let conn = CountingConn { fetches: Cell::new(0) };
        let desired =
            mapper::map_params(vec![("name".to_string(), Param::from("x"))], &[]).unwrap();

        let mut cache = StateCache::new(&kind, &conn);
        assert_eq!(conn.fetches.get(), 0);

        cache.get(&desired).unwrap();
        cache.get(&desired).unwrap();
        assert_eq!(conn.fetches.get(), 1);

        cache.invalidate();
        cache.get(&desired).unwrap();
        assert_eq!(conn.fetches.get(), 2);
    }
}

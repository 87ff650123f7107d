//! Query cache with explicit staleness, TTL, and prefix invalidation.
//!
//! DESIGN
//! ======
//! The hosted framework the dashboard grew out of kept a module-level query
//! cache with implicit invalidation. Here the cache is an explicit object:
//! entries are keyed by hierarchical [`QueryKey`]s, lookups report
//! fresh/stale/miss against a configurable policy, and mutations invalidate
//! by key prefix (`cases` drops `cases/{id}/notes` too). Time is passed in
//! by the caller, so behavior is deterministic under test.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

/// Hierarchical cache key, e.g. `cases/6a3b…/notes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Build a key from path segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Whether `prefix` is a (non-strict) prefix of this key.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Staleness and eviction policy.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    /// Entries younger than this serve without a refetch.
    pub stale_after: Duration,
    /// Entries older than this are dropped outright.
    pub evict_after: Duration,
}

impl Default for Policy {
    fn default() -> Self {
        Self { stale_after: Duration::from_secs(30), evict_after: Duration::from_secs(300) }
    }
}

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Young enough to serve directly.
    Fresh(Value),
    /// Usable, but the caller should refetch.
    Stale(Value),
    /// Nothing cached (or the entry aged out).
    Miss,
}

struct Entry {
    value: Value,
    inserted_at: Instant,
}

/// The request-scoped query cache.
#[derive(Default)]
pub struct Cache {
    policy: Policy,
    entries: HashMap<QueryKey, Entry>,
}

impl Cache {
    /// Create a cache with the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { policy, entries: HashMap::new() }
    }

    /// Look up `key` as of `now`, evicting entries past the TTL.
    pub fn lookup(&mut self, key: &QueryKey, now: Instant) -> Lookup {
        let (age, value) = match self.entries.get(key) {
            Some(entry) => (now.duration_since(entry.inserted_at), entry.value.clone()),
            None => return Lookup::Miss,
        };
        if age >= self.policy.evict_after {
            self.entries.remove(key);
            return Lookup::Miss;
        }
        if age >= self.policy.stale_after { Lookup::Stale(value) } else { Lookup::Fresh(value) }
    }

    /// Store a query result under `key` as of `now`, replacing any previous
    /// entry.
    pub fn put(&mut self, key: QueryKey, value: Value, now: Instant) {
        self.entries.insert(key, Entry { value, inserted_at: now });
    }

    /// Drop `prefix` and every key beneath it. Returns how many entries were
    /// dropped.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!(prefix = %prefix, dropped, "cache invalidated");
        }
        dropped
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

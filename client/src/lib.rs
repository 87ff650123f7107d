//! Headless dashboard layer for caseboard.
//!
//! Everything the dashboard pages *do*, with no rendering attached: HTTP
//! data access against the hosted backend, an explicit query cache with
//! invalidation keys, mutation operations returning explicit results, and
//! per-page view state (search, filtering, date math, the note composer,
//! the audio recorder).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`net`] | HTTP client for the hosted backend and integrations |
//! | [`cache`] | Query cache: staleness, TTL, prefix invalidation |
//! | [`ops`] | Cached queries and invalidating mutations |
//! | [`state`] | Page-scoped view state, one module per page |

pub mod cache;
pub mod net;
pub mod ops;
pub mod state;

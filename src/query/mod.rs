//! Keyed request cache for user searches and repository pages.
//!
//! The store owns one entry per request key: a user search per keyword and a
//! paged repository listing per owner. Callers go through a begin/resolve
//! pair for every request:
//!
//! - `begin_*` returns a fetch descriptor, or `None` when the key already has
//!   a request in flight (single-flight) or nothing needs fetching.
//! - `resolve_*` stores the result only when the descriptor still matches
//!   the in-flight request for its key. Results for superseded or
//!   invalidated requests are dropped.
//!
//! The store never performs I/O; executing a descriptor is left to the
//! caller, which keeps every transition deterministic under test.

mod state;
mod store;

pub use state::{PagedQueryState, QueryState, QueryStatus};
pub use store::{
    DEFAULT_USERS_PER_PAGE, QuerySettings, QueryStore, RepositoriesFetch, Resolution, UsersFetch,
};

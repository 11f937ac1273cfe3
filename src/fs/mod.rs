//! Filesystem utilities for query-config.
//!
//! Atomic writes keep the job-scoped cache file consistent; the path helpers
//! resolve user-supplied paths against the workspace without touching disk.

pub mod atomic;
pub mod paths;

pub use atomic::atomic_write_file;
pub use paths::{join_under, normalize_lexically, resolve_against};

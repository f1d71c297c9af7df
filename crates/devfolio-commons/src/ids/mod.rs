//! Type-safe identifier newtypes.
//!
//! Each identifier wraps a `String` so ids of different entity kinds
//! cannot be swapped by accident. Generated ids are time-ordered:
//! nanosecond timestamp plus a process-local sequence number, so two ids
//! generated in the same instant still differ.

mod entry_id;
mod post_id;
mod user_id;

pub use entry_id::EntryId;
pub use post_id::PostId;
pub use user_id::UserId;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Produce a unique time-ordered id with the given prefix.
pub(crate) fn generate_id(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) & 0xffff;
    format!("{}_{:x}{:04x}", prefix, nanos, seq)
}

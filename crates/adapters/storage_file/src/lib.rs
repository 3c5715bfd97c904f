//! # dashpush-adapter-storage-file
//!
//! File persistence adapter for the dashboard snapshot.
//!
//! ## Responsibilities
//! - Implement the `SnapshotStore` port defined in `dashpush-app::ports`
//! - Keep the current snapshot in memory behind a read-write lock so reads
//!   never touch the filesystem
//! - Flush every write to a pretty-printed JSON file, replacing it through a
//!   temporary sibling and a rename
//! - Treat a missing file on startup as "no snapshot yet"
//!
//! ## Dependency rule
//! Depends on `dashpush-app` (for the port trait) and `dashpush-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod store;

pub use error::FileStoreError;
pub use store::FileSnapshotStore;

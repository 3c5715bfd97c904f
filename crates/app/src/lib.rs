//! # dashpush-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** storage adapters implement:
//!   - `SnapshotStore` — get/put of the single current snapshot
//! - Define the **ingress guard** checking the shared bearer secret
//! - Define **driving/inbound use-cases**:
//!   - `SnapshotService` — authorized update, lenient read
//!
//! ## Dependency rule
//! Depends on `dashpush-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod guard;
pub mod ports;
pub mod services;

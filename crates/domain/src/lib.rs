//! # dashpush-domain
//!
//! Pure domain model for the dashpush widget server.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **Snapshot** (the single persisted dashboard state) and the
//!   **Payload** it is built from
//! - Define **metric policies**: lenient number parsing, status banding,
//!   objection ranking, funnel bars
//! - Define **widget descriptors**: which sections each widget kind shows
//!   and which metric keys they bind to
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.

pub mod error;
pub mod time;

pub mod funnel;
pub mod metric;
pub mod objection;
pub mod snapshot;
pub mod status;
pub mod widget;

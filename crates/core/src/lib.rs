//! Domain logic for the audit dependency/history backend.
//!
//! This crate has no internal dependencies and no I/O: entity kinds, the
//! 3-slot edge encoding, priority levels, per-kind field schemas, snapshot
//! comparison, alert derivation, pagination math, and the small state
//! machines the listing/dialog flows use. Persistence lives in `audhub-db`,
//! HTTP in `audhub-api`.

pub mod alert;
pub mod annotation;
pub mod compare;
pub mod draft;
pub mod edge;
pub mod entity;
pub mod error;
pub mod pagination;
pub mod priority;
pub mod refresh;
pub mod schema;
pub mod types;

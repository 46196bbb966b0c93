//! fingerprint (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `fingerprint::{core,term,types}` and hosts the process-level [`config`].

pub mod config;

pub use fingerprint_core as core;
pub use fingerprint_term as term;
pub use fingerprint_types as types;

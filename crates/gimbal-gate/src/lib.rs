//! Gimbal Gate - post-build performance quality gate
//!
//! Two independent pipelines share one configuration and a build trigger:
//! - Audit aggregation: invoke the audit runner against production build
//!   output, extract threshold failures from the hierarchical result tree,
//!   and route them into the build's error or warning sink per policy
//! - Bailout extraction: reduce the post-completion stats snapshot to
//!   per-module optimization-bailout records, drop known-noisy entries,
//!   and write the curated report to disk

pub mod bailout;
pub mod compilation;
pub mod extract;
pub mod gate;
pub mod route;
pub mod runner;

// Re-export key types
pub use compilation::{BuildMode, Compilation, DiagnosticSinks};
pub use gate::GimbalGate;
pub use runner::AuditRunner;

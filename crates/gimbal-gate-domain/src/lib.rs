//! Gimbal Gate Domain Model
//!
//! Defines the data shapes shared by both gate pipelines:
//! - AuditRun / JobResult / Report: the hierarchical result tree returned
//!   by the audit runner
//! - Status: explicit three-valued audit status (passed / failed / unknown)
//! - Diagnostic: structured threshold-failure record, formatted only at
//!   the sink boundary
//! - StatsSnapshot / ModuleStats / BailoutRecord: per-module
//!   optimization-bailout metadata and the curated report rows
//! - GateConfig: construction-time configuration with total defaulting
//!
//! All objects are serializable; the tree and snapshot types mirror the
//! JSON the external collaborators produce.

pub mod audit;
pub mod bailout;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod status;

pub use audit::{AuditRun, JobResult, Report};
pub use bailout::{render_report, BailoutRecord, ModuleStats, StatsSnapshot};
pub use config::{
    AuditOptions, BailoutReport, GateConfig, PartialAuditOptions, PartialGateConfig,
    DEFAULT_BAILOUT_FILE,
};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{DomainError, Result};
pub use status::Status;

/// Gimbal gate domain version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

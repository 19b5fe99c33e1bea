//! Audit runner seam.
//!
//! The gate never implements an individual audit; it only consumes the
//! result tree returned by an external runner. Runner failures propagate
//! to the caller unchanged — the runner is expected to report audit
//! failures through `success` fields in its tree rather than by raising.

use async_trait::async_trait;
use gimbal_gate_domain::{AuditOptions, AuditRun};
use std::path::Path;

/// External service that executes the configured audits against a build
/// output directory and returns the hierarchical result tree.
#[async_trait]
pub trait AuditRunner: Send + Sync {
    /// Run all enabled audits for one build.
    ///
    /// `cwd` is the working directory, `build_dir` the build-output
    /// subdirectory, and `options` the recognized option set plus any
    /// passthrough keys.
    async fn audit(
        &self,
        cwd: &Path,
        build_dir: Option<&str>,
        options: &AuditOptions,
    ) -> anyhow::Result<AuditRun>;
}

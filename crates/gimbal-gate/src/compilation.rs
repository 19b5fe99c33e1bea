//! Build orchestrator contact surface.
//!
//! Only the minimal shapes the gate reads and writes are modeled: an
//! output directory, a build-mode indicator, and the two diagnostics
//! collections. Each build owns its own [`Compilation`]; sinks are never
//! shared across concurrent builds.

use std::path::PathBuf;

/// Build mode as indicated by the orchestrator or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Production,
    Development,

    /// No explicit mode set.
    #[default]
    None,
}

impl BuildMode {
    /// Parse an orchestrator mode setting or environment indicator.
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some("production") => BuildMode::Production,
            Some("development") => BuildMode::Development,
            _ => BuildMode::None,
        }
    }

    /// Audits only run against production-optimized output.
    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

/// The host's error and warning collections for one build.
#[derive(Debug, Default)]
pub struct DiagnosticSinks {
    /// Build-breaking diagnostics.
    pub errors: Vec<String>,

    /// Non-breaking diagnostics.
    pub warnings: Vec<String>,
}

/// Per-build compilation handle.
#[derive(Debug)]
pub struct Compilation {
    /// Build output directory.
    pub output_path: PathBuf,

    /// Mode indicator for the audit guard.
    pub mode: BuildMode,

    /// Diagnostics collections the gate appends to.
    pub sinks: DiagnosticSinks,
}

impl Compilation {
    /// Create a compilation handle with empty sinks.
    pub fn new(output_path: PathBuf, mode: BuildMode) -> Self {
        Compilation {
            output_path,
            mode,
            sinks: DiagnosticSinks::default(),
        }
    }
}

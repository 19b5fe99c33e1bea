//! Gate configuration and total defaulting.
//!
//! Configuration is merged once at construction and immutable thereafter.
//! The merge is shallow at the top level and shallow inside the nested
//! audit options; it never fails. Unrecognized option keys are carried
//! through to the audit runner untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Report file name used when `optimizationBailout` is simply `true`.
pub const DEFAULT_BAILOUT_FILE: &str = "optimization-bailout.json";

/// The `optimizationBailout` setting: `false`, `true`, or a file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BailoutReport {
    /// `true` enables the report at [`DEFAULT_BAILOUT_FILE`]; `false`
    /// disables the pipeline entirely.
    Toggle(bool),

    /// Enabled, written to this file name verbatim.
    File(String),
}

impl BailoutReport {
    /// File name to write, or `None` when the pipeline is disabled.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            BailoutReport::Toggle(false) => None,
            BailoutReport::Toggle(true) => Some(DEFAULT_BAILOUT_FILE),
            BailoutReport::File(name) => Some(name),
        }
    }
}

impl Default for BailoutReport {
    fn default() -> Self {
        BailoutReport::Toggle(false)
    }
}

/// Options forwarded to the audit runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOptions {
    /// Build-output subdirectory handed to the runner.
    pub build_dir: Option<String>,

    /// Emit annotated output.
    pub comment: bool,

    /// Enable the runner's diagnostic logging.
    pub verbose: bool,

    /// Enforce configured limits.
    pub check_thresholds: bool,

    /// Bundle-size audit category.
    pub size: bool,

    /// Unused-source audit category.
    pub calculate_unused_source: bool,

    /// Heap-snapshot audit category.
    pub heap_snapshot: bool,

    /// Page-load audit category.
    pub lighthouse: bool,

    /// Unrecognized keys, passed through to the runner unvalidated.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        AuditOptions {
            build_dir: None,
            comment: true,
            verbose: false,
            check_thresholds: true,
            size: true,
            calculate_unused_source: true,
            heap_snapshot: true,
            lighthouse: true,
            extra: Map::new(),
        }
    }
}

/// Complete gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Routing policy: `true` sends every diagnostic to the errors sink,
    /// `false` to the warnings sink.
    pub bail: bool,

    /// Curated bailout-report setting.
    pub optimization_bailout: BailoutReport,

    /// Audit runner options.
    pub options: AuditOptions,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            bail: false,
            optimization_bailout: BailoutReport::default(),
            options: AuditOptions::default(),
        }
    }
}

/// Partial audit options as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAuditOptions {
    pub build_dir: Option<String>,
    pub comment: Option<bool>,
    pub verbose: Option<bool>,
    pub check_thresholds: Option<bool>,
    pub size: Option<bool>,
    pub calculate_unused_source: Option<bool>,
    pub heap_snapshot: Option<bool>,
    pub lighthouse: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial gate configuration as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialGateConfig {
    pub bail: Option<bool>,
    pub optimization_bailout: Option<BailoutReport>,
    pub options: Option<PartialAuditOptions>,
}

impl PartialGateConfig {
    /// Merge over the defaults: shallow at the top level, shallow inside
    /// `options`. Total; unknown option keys pass through silently.
    pub fn into_config(self) -> GateConfig {
        let defaults = GateConfig::default();

        let options = match self.options {
            Some(partial) => {
                let base = defaults.options;
                AuditOptions {
                    build_dir: partial.build_dir.or(base.build_dir),
                    comment: partial.comment.unwrap_or(base.comment),
                    verbose: partial.verbose.unwrap_or(base.verbose),
                    check_thresholds: partial.check_thresholds.unwrap_or(base.check_thresholds),
                    size: partial.size.unwrap_or(base.size),
                    calculate_unused_source: partial
                        .calculate_unused_source
                        .unwrap_or(base.calculate_unused_source),
                    heap_snapshot: partial.heap_snapshot.unwrap_or(base.heap_snapshot),
                    lighthouse: partial.lighthouse.unwrap_or(base.lighthouse),
                    extra: partial.extra,
                }
            }
            None => defaults.options,
        };

        GateConfig {
            bail: self.bail.unwrap_or(defaults.bail),
            optimization_bailout: self
                .optimization_bailout
                .unwrap_or(defaults.optimization_bailout),
            options,
        }
    }
}

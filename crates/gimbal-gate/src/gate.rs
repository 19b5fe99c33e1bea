//! Gate orchestration: the two pipeline entry points.

use crate::bailout::{extract_records, filter_noise, write_report};
use crate::compilation::Compilation;
use crate::extract::failing_reports;
use crate::route::route;
use crate::runner::AuditRunner;
use gimbal_gate_domain::{Diagnostic, GateConfig, PartialGateConfig, Severity, StatsSnapshot};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Post-build quality gate for one build pipeline.
///
/// Configuration is merged once at construction and immutable thereafter;
/// the routing policy is read from it at call time, never from ambient
/// state. One instance per build when the host runs builds concurrently,
/// since outputs go straight into the build-specific sinks.
pub struct GimbalGate {
    config: GateConfig,
}

impl GimbalGate {
    /// Merge the supplied partial configuration over the defaults.
    pub fn new(partial: PartialGateConfig) -> Self {
        GimbalGate {
            config: partial.into_config(),
        }
    }

    /// The merged configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Audit aggregation pipeline, run on the pre-finalization hook.
    ///
    /// Outside production mode this is a no-op success: the runner is
    /// never invoked and nothing is emitted. In production, threshold
    /// failures from the result tree become diagnostics routed to the
    /// errors sink when `bail` is set, the warnings sink otherwise.
    /// Runner failures propagate unchanged.
    pub async fn run_audits(
        &self,
        runner: &dyn AuditRunner,
        compilation: &mut Compilation,
    ) -> anyhow::Result<()> {
        if !compilation.mode.is_production() {
            debug!(mode = ?compilation.mode, "Skipping audits outside production mode");
            return Ok(());
        }

        let run = runner
            .audit(
                &compilation.output_path,
                self.config.options.build_dir.as_deref(),
                &self.config.options,
            )
            .await?;

        let severity = Severity::from_bail(self.config.bail);
        let diagnostics: Vec<Diagnostic> = failing_reports(&run)
            .into_iter()
            .map(|(job, report)| Diagnostic::from_failure(job, report, severity))
            .collect();

        info!(
            failures = diagnostics.len(),
            bail = self.config.bail,
            "Audit aggregation complete"
        );
        route(&diagnostics, &mut compilation.sinks);
        Ok(())
    }

    /// Bailout extraction pipeline, run on the post-completion hook.
    ///
    /// Config-gated: when the report is disabled nothing happens. The
    /// file write is awaited and its failure surfaces here. Returns the
    /// written path, or `None` when disabled.
    pub async fn write_bailout_report(
        &self,
        snapshot: &StatsSnapshot,
        out_dir: &Path,
    ) -> anyhow::Result<Option<PathBuf>> {
        let Some(file_name) = self.config.optimization_bailout.file_name() else {
            return Ok(None);
        };

        let records = filter_noise(extract_records(snapshot));
        let path = out_dir.join(file_name);
        write_report(&records, &path).await?;
        Ok(Some(path))
    }
}

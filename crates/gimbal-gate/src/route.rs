//! Policy routing into the host's diagnostics collections.

use crate::compilation::DiagnosticSinks;
use gimbal_gate_domain::{Diagnostic, Severity};

/// Append each diagnostic's rendered message to exactly one sink.
///
/// Severity was already decided by the gate policy when the diagnostics
/// were built, so this only formats and appends; it never raises. The
/// build orchestrator decides the build's final status from the sink
/// contents.
pub fn route(diagnostics: &[Diagnostic], sinks: &mut DiagnosticSinks) {
    for diagnostic in diagnostics {
        let message = diagnostic.to_string();
        match diagnostic.severity {
            Severity::Error => sinks.errors.push(message),
            Severity::Warning => sinks.warnings.push(message),
        }
    }
}

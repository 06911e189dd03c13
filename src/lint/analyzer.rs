//! Runs enabled checks against a snapshot.
//!
//! Checks are independent, read-only functions of the snapshot. With the
//! `rayon` feature they are evaluated on the global pool; results are always
//! collected back into registry order before the report is built, so no
//! check ever observes another's output.

use std::collections::BTreeSet;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::lint::config::LintConfig;
use crate::lint::registry::{CheckRegistry, RegisteredCheck};
use crate::lint::report::{CheckResult, DefectReport};
use crate::mesh_error::MeshLintError;
use crate::topology::snapshot::MeshSnapshot;

/// Analyze `snapshot` with the builtin registry.
///
/// # Errors
/// [`MeshLintError::InvalidSnapshot`] if a face has fewer than three
/// vertices or any stored index is out of range.
pub fn analyze(
    snapshot: &MeshSnapshot,
    enabled_symbols: &BTreeSet<String>,
) -> Result<DefectReport, MeshLintError> {
    analyze_with(CheckRegistry::builtin(), snapshot, enabled_symbols)
}

/// Analyze `snapshot` with the builtin registry and the toggles in `config`.
pub fn analyze_config(
    snapshot: &MeshSnapshot,
    config: &LintConfig,
) -> Result<DefectReport, MeshLintError> {
    analyze_with(CheckRegistry::builtin(), snapshot, config.enabled_symbols())
}

/// Analyze `snapshot` against an explicit registry.
///
/// Symbols in `enabled_symbols` that the registry does not know are ignored.
pub fn analyze_with(
    registry: &CheckRegistry,
    snapshot: &MeshSnapshot,
    enabled_symbols: &BTreeSet<String>,
) -> Result<DefectReport, MeshLintError> {
    snapshot.validate()?;

    for symbol in enabled_symbols.iter().filter(|s| !registry.contains(s)) {
        log::warn!("ignoring unknown check `{symbol}`");
    }

    let evaluate = |check: &RegisteredCheck| {
        if enabled_symbols.contains(check.definition.symbol) {
            CheckResult::evaluated(check.definition, (check.rule)(snapshot))
        } else {
            CheckResult::not_evaluated(check.definition)
        }
    };

    #[cfg(feature = "rayon")]
    let results: Vec<CheckResult> = registry.checks().par_iter().map(evaluate).collect();
    #[cfg(not(feature = "rayon"))]
    let results: Vec<CheckResult> = registry.checks().iter().map(evaluate).collect();

    log::debug!(
        "analyzed mesh (verts={}, edges={}, faces={}): {}",
        snapshot.vertex_count(),
        snapshot.edge_count(),
        snapshot.face_count(),
        results
            .iter()
            .map(|r| format!("{}={}", r.symbol(), r.count_text()))
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(DefectReport::new(results))
}

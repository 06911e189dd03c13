//! Continuous checking driven by the host's edit loop.
//!
//! A [`LiveSession`] holds the state one host needs between ticks: the last
//! topology summary and the last report. Each tick runs the change gate,
//! and only when it fires builds a snapshot, analyzes it and diffs against
//! the previous report. The host owns the session and sequences the ticks;
//! nothing here is global.

use crate::lint::analyzer::analyze_with;
use crate::lint::config::LintConfig;
use crate::lint::diff::diff;
use crate::lint::gate::should_rescan;
use crate::lint::registry::CheckRegistry;
use crate::lint::report::DefectReport;
use crate::mesh_error::MeshLintError;
use crate::topology::snapshot::MeshSnapshot;
use crate::topology::summary::{MeshIdentity, TopologySummary};

/// What one tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The summary matched the previous tick; nothing was analyzed.
    Unchanged,
    /// A full analysis ran. `message` is the growth diff, if anything grew.
    Scanned { message: Option<String> },
}

/// Previous summary and report for one host's live check.
#[derive(Clone, Debug, Default)]
pub struct LiveSession {
    previous_summary: Option<TopologySummary>,
    previous_report: Option<DefectReport>,
    report_mesh: Option<MeshIdentity>,
    force_rescan: bool,
}

impl LiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one live-check step.
    ///
    /// `build_snapshot` is only called when the gate decides a rescan is
    /// needed. The diff baseline is the stored report when it was taken from
    /// the same mesh identity, and an empty report otherwise.
    ///
    /// On error the session is left as it was.
    pub fn tick<F>(
        &mut self,
        registry: &CheckRegistry,
        config: &LintConfig,
        summary: TopologySummary,
        build_snapshot: F,
    ) -> Result<TickOutcome, MeshLintError>
    where
        F: FnOnce() -> Result<MeshSnapshot, MeshLintError>,
    {
        if !self.force_rescan && !should_rescan(self.previous_summary.as_ref(), &summary) {
            log::trace!("live check: topology unchanged, skipping");
            return Ok(TickOutcome::Unchanged);
        }

        let same_mesh = self
            .report_mesh
            .is_none_or(|mesh| mesh == summary.mesh_identity);
        let snapshot = build_snapshot()?;
        let report = analyze_with(registry, &snapshot, config.enabled_symbols())?;
        let baseline = if same_mesh {
            self.previous_report.as_ref()
        } else {
            None
        };
        let message = diff(baseline, &report)?;

        if let Some(message) = &message {
            log::debug!("live check: {message}");
        }
        self.previous_summary = Some(summary);
        self.previous_report = Some(report);
        self.report_mesh = Some(summary.mesh_identity);
        self.force_rescan = false;
        Ok(TickOutcome::Scanned { message })
    }

    /// Stores a report from a one-shot scan of `mesh_identity` so the next
    /// tick on that mesh diffs against it.
    pub fn record_report(&mut self, mesh_identity: MeshIdentity, report: DefectReport) {
        self.previous_report = Some(report);
        self.report_mesh = Some(mesh_identity);
    }

    /// Forces the next tick to rescan, keeping the previous report as the
    /// diff baseline. Call after toggling checks.
    pub fn invalidate(&mut self) {
        self.force_rescan = true;
    }

    /// Forgets everything; the next tick behaves like the first.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn previous_summary(&self) -> Option<&TopologySummary> {
        self.previous_summary.as_ref()
    }

    /// The most recent report, from a tick or [`record_report`](Self::record_report).
    pub fn report(&self) -> Option<&DefectReport> {
        self.previous_report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshSnapshot {
        MeshSnapshot::from_polygons(4, [vec![0, 1, 2, 3]]).unwrap()
    }

    #[test]
    fn unchanged_summary_skips_snapshot_build() {
        let registry = CheckRegistry::builtin();
        let config = LintConfig::from_registry(registry);
        let mut session = LiveSession::new();
        let summary = quad().summary(MeshIdentity::new(1));

        let first = session.tick(registry, &config, summary, || Ok(quad())).unwrap();
        assert!(matches!(first, TickOutcome::Scanned { .. }));

        let second = session
            .tick(registry, &config, summary, || panic!("must not rebuild"))
            .unwrap();
        assert_eq!(second, TickOutcome::Unchanged);
    }

    #[test]
    fn failed_build_leaves_state_untouched() {
        let registry = CheckRegistry::builtin();
        let config = LintConfig::from_registry(registry);
        let mut session = LiveSession::new();
        let summary = TopologySummary::new(MeshIdentity::new(1), 2, 0, 1);

        let result = session.tick(registry, &config, summary, || {
            MeshSnapshot::from_polygons(2, [vec![0, 1]])
        });
        assert!(matches!(result, Err(MeshLintError::InvalidSnapshot(_))));
        assert!(session.previous_summary().is_none());
        assert!(session.report().is_none());
    }

    #[test]
    fn invalidate_forces_rescan_but_keeps_baseline() {
        let registry = CheckRegistry::builtin();
        let pentagon = || MeshSnapshot::from_polygons(5, [vec![0, 1, 2, 3, 4]]);
        let mut config = LintConfig::with_enabled(["ngons"]);
        let mut session = LiveSession::new();
        let summary = pentagon().unwrap().summary(MeshIdentity::new(1));

        let first = session.tick(registry, &config, summary, pentagon).unwrap();
        assert_eq!(
            first,
            TickOutcome::Scanned {
                message: Some("MeshLint found Ngons: 1 face".to_string())
            }
        );

        config.enable("nonmanifold");
        session.invalidate();
        let second = session.tick(registry, &config, summary, pentagon).unwrap();
        // the ngon is already in the baseline, so nothing grew
        assert_eq!(second, TickOutcome::Scanned { message: None });
        assert!(session.report().unwrap().get("nonmanifold").unwrap().is_enabled());

        let third = session.tick(registry, &config, summary, pentagon).unwrap();
        assert_eq!(third, TickOutcome::Unchanged);
    }
}

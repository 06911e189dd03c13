//! Defect reports produced by one analysis run.

use std::collections::BTreeSet;

use crate::lint::diff::depluralize;
use crate::lint::registry::{CheckDefinition, CheckRegistry};
use crate::topology::element::{EdgeId, ElementKind, FaceId, VertId};

/// Text shown in place of a count for checks that were not run.
pub const NOT_EVALUATED_TEXT: &str = "(N/A - disabled)";

/// Flagged element indices, one ordered set per element type.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ElementSets {
    pub verts: BTreeSet<VertId>,
    pub edges: BTreeSet<EdgeId>,
    pub faces: BTreeSet<FaceId>,
}

impl ElementSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verts(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.verts.extend(indices.into_iter().map(VertId::new));
        self
    }

    pub fn with_edges(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.edges.extend(indices.into_iter().map(EdgeId::new));
        self
    }

    pub fn with_faces(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.faces.extend(indices.into_iter().map(FaceId::new));
        self
    }

    /// Number of flagged elements of one type.
    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.verts.len(),
            ElementKind::Edge => self.edges.len(),
            ElementKind::Face => self.faces.len(),
        }
    }

    /// Raw indices of one type, ascending. This is what a host selects.
    pub fn indices(&self, kind: ElementKind) -> Vec<usize> {
        match kind {
            ElementKind::Vertex => self.verts.iter().map(|v| v.index()).collect(),
            ElementKind::Edge => self.edges.iter().map(|e| e.index()).collect(),
            ElementKind::Face => self.faces.iter().map(|f| f.index()).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.verts.len() + self.edges.len() + self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Adds every element of `other`.
    pub fn merge(&mut self, other: &ElementSets) {
        self.verts.extend(other.verts.iter().copied());
        self.edges.extend(other.edges.iter().copied());
        self.faces.extend(other.faces.iter().copied());
    }
}

/// Outcome of one check.
///
/// A result that was not evaluated always carries empty sets; it is kept
/// distinct from an evaluated result that found nothing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CheckResult {
    check: CheckDefinition,
    enabled: bool,
    defects: ElementSets,
}

impl CheckResult {
    pub fn evaluated(check: CheckDefinition, defects: ElementSets) -> Self {
        Self {
            check,
            enabled: true,
            defects,
        }
    }

    pub fn not_evaluated(check: CheckDefinition) -> Self {
        Self {
            check,
            enabled: false,
            defects: ElementSets::default(),
        }
    }

    pub fn check(&self) -> &CheckDefinition {
        &self.check
    }

    pub fn symbol(&self) -> &'static str {
        self.check.symbol
    }

    pub fn label(&self) -> &'static str {
        self.check.label
    }

    /// False when the check was disabled for this run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn defects(&self) -> &ElementSets {
        &self.defects
    }

    pub fn verts(&self) -> &BTreeSet<VertId> {
        &self.defects.verts
    }

    pub fn edges(&self) -> &BTreeSet<EdgeId> {
        &self.defects.edges
    }

    pub fn faces(&self) -> &BTreeSet<FaceId> {
        &self.defects.faces
    }

    /// Total flagged elements across all three types.
    pub fn count(&self) -> usize {
        self.defects.total()
    }

    /// The count column of a lint panel: a number, or the disabled marker.
    pub fn count_text(&self) -> String {
        if self.enabled {
            self.count().to_string()
        } else {
            NOT_EVALUATED_TEXT.to_string()
        }
    }

    /// One panel row, e.g. `"No Tris!"`, `"3x Ngons"`, `"1x Interior Face"`.
    pub fn status_label(&self) -> String {
        if !self.enabled {
            return format!("{NOT_EVALUATED_TEXT} {}", self.check.label);
        }
        match self.count() {
            0 => format!("No {}!", self.check.label),
            n => depluralize(n, &format!("{n}x {}", self.check.label)).to_string(),
        }
    }
}

/// One result per registered check, in registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DefectReport {
    results: Vec<CheckResult>,
}

impl DefectReport {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// Every check in `registry` evaluated with nothing flagged.
    ///
    /// Stands in for a missing previous report so a first diff reports the
    /// whole current state as growth.
    pub fn none_report(registry: &CheckRegistry) -> Self {
        Self::from_definitions(registry.definitions().copied())
    }

    /// Same check list as `self`, every check evaluated and empty.
    pub fn empty_like(&self) -> Self {
        Self::from_definitions(self.results.iter().map(|r| r.check))
    }

    fn from_definitions(definitions: impl Iterator<Item = CheckDefinition>) -> Self {
        Self {
            results: definitions
                .map(|d| CheckResult::evaluated(d, ElementSets::default()))
                .collect(),
        }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> + '_ {
        self.results.iter()
    }

    pub fn get(&self, symbol: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.symbol() == symbol)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sum of every result's count.
    pub fn total_count(&self) -> usize {
        self.results.iter().map(CheckResult::count).sum()
    }

    /// Union of all flagged elements: what "select lint" highlights.
    pub fn selection(&self) -> ElementSets {
        let mut selection = ElementSets::default();
        for result in self.results.iter().filter(|r| r.enabled) {
            selection.merge(&result.defects);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a DefectReport {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

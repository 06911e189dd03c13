//! Growth-oriented comparison of two defect reports.
//!
//! Only increases are reported: for each check and each element type, if the
//! current report flags more elements than the previous one, the difference
//! in counts becomes a fragment like `"2 edges"`. Shrinking or unchanged
//! counts stay silent. Checks appear in registry order, element types in the
//! fixed order verts, edges, faces.

use itertools::Itertools;

use crate::lint::report::{CheckResult, DefectReport};
use crate::mesh_error::{MeshLintError, RegistryFault};
use crate::topology::element::ElementKind;

/// Leading text of every diff message.
pub const MESSAGE_PREFIX: &str = "MeshLint found ";

/// Drops trailing `s` characters when `count` is exactly one.
///
/// ASCII-only; good for `"faces"` and `"3x Tris"`, nothing more.
pub fn depluralize(count: usize, noun: &str) -> &str {
    if count == 1 {
        noun.trim_end_matches('s')
    } else {
        noun
    }
}

/// Renders what grew between `previous` and `current`.
///
/// A missing `previous` is treated as a report with every check evaluated
/// and empty. Returns `Ok(None)` when nothing grew.
///
/// # Errors
/// [`MeshLintError::RegistryMismatch`] if the reports differ in length or in
/// the check at any position.
///
/// # Example
///
/// ```
/// use mesh_lint::lint::diff::diff;
/// use mesh_lint::lint::registry::TRIS;
/// use mesh_lint::lint::report::{CheckResult, DefectReport, ElementSets};
///
/// let current = DefectReport::new(vec![CheckResult::evaluated(
///     TRIS,
///     ElementSets::new().with_faces([0]),
/// )]);
/// assert_eq!(
///     diff(None, &current).unwrap().as_deref(),
///     Some("MeshLint found Tris: 1 face")
/// );
/// ```
pub fn diff(
    previous: Option<&DefectReport>,
    current: &DefectReport,
) -> Result<Option<String>, MeshLintError> {
    let fallback;
    let previous = match previous {
        Some(report) => report,
        None => {
            fallback = current.empty_like();
            &fallback
        }
    };

    if previous.len() != current.len() {
        return Err(RegistryFault::Length {
            previous: previous.len(),
            current: current.len(),
        }
        .into());
    }

    let mut checks = Vec::new();
    for (position, (before, now)) in previous.iter().zip(current.iter()).enumerate() {
        if before.symbol() != now.symbol() {
            return Err(RegistryFault::Order {
                position,
                previous: before.symbol(),
                current: now.symbol(),
            }
            .into());
        }
        if let Some(growth) = check_growth(before, now) {
            checks.push(growth);
        }
    }

    if checks.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!("{MESSAGE_PREFIX}{}", checks.iter().join(", "))))
}

/// `"<label>: <n> <noun>, ..."` for one check, or `None` if nothing grew.
pub fn check_growth(before: &CheckResult, now: &CheckResult) -> Option<String> {
    let fragments: Vec<String> = ElementKind::ALL
        .iter()
        .filter_map(|&kind| {
            let (old, new) = (before.defects().count(kind), now.defects().count(kind));
            (new > old).then(|| {
                let grown = new - old;
                format!("{grown} {}", depluralize(grown, kind.plural_noun()))
            })
        })
        .collect();

    if fragments.is_empty() {
        None
    } else {
        Some(format!("{}: {}", now.label(), fragments.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::registry::{CheckDefinition, NGONS, TRIS};
    use crate::lint::report::ElementSets;

    const CHECK_A: CheckDefinition = CheckDefinition::new("check_a", "CheckA", true);
    const CHECK_B: CheckDefinition = CheckDefinition::new("check_b", "CheckB", true);
    const CHECK_C: CheckDefinition = CheckDefinition::new("check_c", "CheckC", true);

    fn report(entries: [(CheckDefinition, ElementSets); 3]) -> DefectReport {
        DefectReport::new(
            entries
                .into_iter()
                .map(|(d, sets)| CheckResult::evaluated(d, sets))
                .collect(),
        )
    }

    #[test]
    fn depluralize_only_for_one() {
        assert_eq!(depluralize(1, "foos"), "foo");
        assert_eq!(depluralize(2, "foos"), "foos");
        assert_eq!(depluralize(0, "faces"), "faces");
    }

    #[test]
    fn first_diff_reports_everything() {
        let current = DefectReport::new(vec![CheckResult::evaluated(
            CheckDefinition::new("some", "SomeCheck", true),
            ElementSets::new().with_verts([1, 2, 3, 4]),
        )]);
        assert_eq!(
            diff(None, &current).unwrap().as_deref(),
            Some("MeshLint found SomeCheck: 4 verts")
        );
    }

    #[test]
    fn complex_comparison() {
        let before = report([
            (CHECK_A, ElementSets::new().with_edges([1, 4])),
            (CHECK_B, ElementSets::new().with_edges([2, 3])),
            (CHECK_C, ElementSets::new().with_faces([2, 3])),
        ]);
        let after = report([
            (CHECK_A, ElementSets::new().with_edges([1, 4, 5, 6])),
            (CHECK_B, ElementSets::new().with_edges([2, 3])),
            (
                CHECK_C,
                ElementSets::new().with_verts([1, 2, 3, 4]).with_faces([2, 3, 5]),
            ),
        ]);
        assert_eq!(
            diff(Some(&before), &after).unwrap().as_deref(),
            Some("MeshLint found CheckA: 2 edges, CheckC: 4 verts, 1 face")
        );
    }

    #[test]
    fn shrinking_is_silent() {
        let before = report([
            (CHECK_A, ElementSets::new().with_edges([1, 4, 5])),
            (CHECK_B, ElementSets::new()),
            (CHECK_C, ElementSets::new().with_faces([2])),
        ]);
        let after = report([
            (CHECK_A, ElementSets::new().with_edges([1])),
            (CHECK_B, ElementSets::new()),
            (CHECK_C, ElementSets::new().with_faces([7])),
        ]);
        assert_eq!(diff(Some(&before), &after).unwrap(), None);
        assert_eq!(diff(Some(&after), &after).unwrap(), None);
    }

    #[test]
    fn mismatched_registries_are_rejected() {
        let one = DefectReport::new(vec![CheckResult::evaluated(TRIS, ElementSets::new())]);
        let two = DefectReport::new(vec![
            CheckResult::evaluated(TRIS, ElementSets::new()),
            CheckResult::evaluated(NGONS, ElementSets::new()),
        ]);
        assert_eq!(
            diff(Some(&one), &two),
            Err(MeshLintError::RegistryMismatch(RegistryFault::Length {
                previous: 1,
                current: 2
            }))
        );

        let swapped = DefectReport::new(vec![CheckResult::evaluated(NGONS, ElementSets::new())]);
        assert!(matches!(
            diff(Some(&one), &swapped),
            Err(MeshLintError::RegistryMismatch(RegistryFault::Order { position: 0, .. }))
        ));
    }
}

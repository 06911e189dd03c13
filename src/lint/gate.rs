//! Fast-path filter deciding whether a live check needs a full rescan.
//!
//! Equal summaries are a strong but imperfect proxy for unchanged topology:
//! an edit that keeps every count and the mesh identity (moving a vertex,
//! or deleting one face and adding another) does not trigger a rescan.

use crate::topology::summary::TopologySummary;

/// True unless `current` is identical to `previous`.
pub fn should_rescan(previous: Option<&TopologySummary>, current: &TopologySummary) -> bool {
    let rescan = match previous {
        None => true,
        Some(previous) => previous != current,
    };
    log::trace!("change gate: previous={previous:?} current={current:?} rescan={rescan}");
    rescan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::summary::MeshIdentity;

    fn summary(mesh: u64, v: usize, e: usize, f: usize) -> TopologySummary {
        TopologySummary::new(MeshIdentity::new(mesh), v, e, f)
    }

    #[test]
    fn first_tick_always_scans() {
        assert!(should_rescan(None, &summary(1, 8, 12, 6)));
    }

    #[test]
    fn identical_summary_skips() {
        let s = summary(1, 8, 12, 6);
        assert!(!should_rescan(Some(&s), &s));
    }

    #[test]
    fn any_difference_scans() {
        let base = summary(1, 8, 12, 6);
        for changed in [
            summary(2, 8, 12, 6),
            summary(1, 9, 12, 6),
            summary(1, 8, 13, 6),
            summary(1, 8, 12, 7),
        ] {
            assert!(should_rescan(Some(&base), &changed), "{changed:?}");
        }
    }
}

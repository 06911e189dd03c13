//! Property-based tests for analysis, diffing and the change gate.
//!
//! Run with: cargo test --test proptest_lint

use std::collections::BTreeSet;

use mesh_lint::prelude::*;
use proptest::prelude::*;

const SYMBOLS: [&str; 5] = ["tris", "ngons", "interior_faces", "nonmanifold", "sixplus_poles"];

/// Random polygon soup over `n` vertices; corners within a polygon are distinct.
fn arb_mesh() -> impl Strategy<Value = MeshSnapshot> {
    (3usize..12).prop_flat_map(|n| {
        let polygon = prop::sample::subsequence((0..n).collect::<Vec<_>>(), 3..=n.min(6))
            .prop_shuffle();
        prop::collection::vec(polygon, 0..10).prop_map(move |polygons| {
            MeshSnapshot::from_polygons(n, polygons).expect("distinct corners")
        })
    })
}

fn arb_enabled() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(SYMBOLS.to_vec(), 0..=SYMBOLS.len())
        .prop_map(|symbols| symbols.into_iter().map(String::from).collect())
}

fn arb_summary() -> impl Strategy<Value = TopologySummary> {
    (0u64..3, 0usize..4, 0usize..4, 0usize..4)
        .prop_map(|(id, v, e, f)| TopologySummary::new(MeshIdentity::new(id), v, e, f))
}

proptest! {
    #[test]
    fn disabled_checks_stay_empty(mesh in arb_mesh(), enabled in arb_enabled()) {
        let report = analyze(&mesh, &enabled).unwrap();
        prop_assert_eq!(report.len(), SYMBOLS.len());
        for result in &report {
            prop_assert_eq!(result.is_enabled(), enabled.contains(result.symbol()));
            if !result.is_enabled() {
                prop_assert!(result.defects().is_empty());
            }
        }
    }

    #[test]
    fn analysis_is_idempotent(mesh in arb_mesh(), enabled in arb_enabled()) {
        let a = analyze(&mesh, &enabled).unwrap();
        let b = analyze(&mesh, &enabled).unwrap();
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn report_never_grows_against_itself(mesh in arb_mesh(), enabled in arb_enabled()) {
        let report = analyze(&mesh, &enabled).unwrap();
        prop_assert_eq!(diff(Some(&report), &report).unwrap(), None);
    }

    #[test]
    fn missing_previous_is_none_report(mesh in arb_mesh(), enabled in arb_enabled()) {
        let report = analyze(&mesh, &enabled).unwrap();
        let none = DefectReport::none_report(CheckRegistry::builtin());
        prop_assert_eq!(diff(None, &report).unwrap(), diff(Some(&none), &report).unwrap());
    }

    #[test]
    fn flagged_indices_are_in_range(mesh in arb_mesh()) {
        let all: BTreeSet<String> = SYMBOLS.iter().map(|s| s.to_string()).collect();
        let selection = analyze(&mesh, &all).unwrap().selection();
        prop_assert!(selection.verts.iter().all(|v| v.index() < mesh.vertex_count()));
        prop_assert!(selection.edges.iter().all(|e| e.index() < mesh.edge_count()));
        prop_assert!(selection.faces.iter().all(|f| f.index() < mesh.face_count()));
    }

    #[test]
    fn nonmanifold_edges_match_face_counts(mesh in arb_mesh()) {
        let report = analyze(&mesh, &["nonmanifold".to_string()].into_iter().collect()).unwrap();
        let flagged: Vec<_> = report.get("nonmanifold").unwrap().edges().iter().copied().collect();
        let expected: Vec<_> = mesh
            .edge_ids()
            .filter(|&e| !matches!(mesh.faces_incident_to_edge(e).len(), 1 | 2))
            .collect();
        prop_assert_eq!(flagged, expected);
    }

    #[test]
    fn tris_and_ngons_are_disjoint(mesh in arb_mesh()) {
        let enabled = ["tris".to_string(), "ngons".to_string()].into_iter().collect();
        let report = analyze(&mesh, &enabled).unwrap();
        let tris = report.get("tris").unwrap().faces();
        let ngons = report.get("ngons").unwrap().faces();
        prop_assert!(tris.is_disjoint(ngons));
    }

    #[test]
    fn depluralize_only_singular(count in 0usize..5, stem in "[a-z]{1,8}") {
        let noun = format!("{stem}s");
        let out = depluralize(count, &noun);
        if count == 1 {
            prop_assert!(!out.ends_with('s'));
        } else {
            prop_assert_eq!(out, noun.as_str());
        }
    }

    #[test]
    fn gate_skips_only_identical(a in arb_summary(), b in arb_summary()) {
        prop_assert_eq!(should_rescan(Some(&a), &b), a != b);
        prop_assert!(should_rescan(None, &b));
    }
}

//! The lint engine: checks, reports, diffs and the live-check loop.
//!
//! Typical one-shot use:
//!
//! ```
//! use mesh_lint::lint::{CheckRegistry, LintConfig, analyze_config};
//! use mesh_lint::topology::MeshSnapshot;
//!
//! let mesh = MeshSnapshot::from_polygons(5, [vec![0, 1, 2], vec![1, 3, 4, 2]]).unwrap();
//! let config = LintConfig::from_registry(CheckRegistry::builtin());
//! let report = analyze_config(&mesh, &config).unwrap();
//! assert_eq!(report.get("tris").unwrap().status_label(), "1x Tri");
//! ```

pub mod analyzer;
pub mod checks;
pub mod config;
pub mod diff;
pub mod gate;
pub mod live;
pub mod naming;
pub mod registry;
pub mod report;

pub use analyzer::{analyze, analyze_config, analyze_with};
pub use config::LintConfig;
pub use diff::{depluralize, diff};
pub use gate::should_rescan;
pub use live::{LiveSession, TickOutcome};
pub use naming::is_default_name;
pub use registry::{CheckDefinition, CheckRegistry, CheckRule, RegisteredCheck};
pub use report::{CheckResult, DefectReport, ElementSets};

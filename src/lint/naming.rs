//! Detection of stock primitive names left on objects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names the host gives freshly added primitives.
pub const DEFAULT_NAMES: &[&str] = &[
    "BezierCircle",
    "BezierCurve",
    "Circle",
    "Cone",
    "Cube",
    "CurvePath",
    "Cylinder",
    "Grid",
    "Icosphere",
    "Mball",
    "Monkey",
    "NurbsCircle",
    "NurbsCurve",
    "NurbsPath",
    "Plane",
    "Sphere",
    "Surface",
    "SurfCircle",
    "SurfCurve",
    "SurfCylinder",
    "SurfPatch",
    "SurfSphere",
    "SurfTorus",
    "Text",
];

static DEFAULT_NAME: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^({})\.?\d*$", DEFAULT_NAMES.join("|"));
    Regex::new(&pattern).unwrap_or_else(|e| panic!("default-name pattern: {e}"))
});

/// True if `name` is a stock primitive name, optionally followed by a
/// `.NNN` duplicate suffix (`"Cube"`, `"Plane.001"`).
pub fn is_default_name(name: &str) -> bool {
    DEFAULT_NAME.is_match(name)
}

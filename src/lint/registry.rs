//! Catalog of available checks.
//!
//! A [`CheckRegistry`] is an ordered list of check definitions, each paired
//! with the classification function that implements it. Order is insertion
//! order and doubles as report and display order. The builtin registry holds
//! the five standard checks; hosts can build their own registry with extra
//! checks through [`CheckRegistry::register`].

use once_cell::sync::Lazy;

use crate::lint::checks;
use crate::lint::report::ElementSets;
use crate::topology::snapshot::MeshSnapshot;

/// Static description of one check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CheckDefinition {
    /// Unique key, also the toggle name hosts persist.
    pub symbol: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Whether the check is on in a fresh configuration.
    pub default_enabled: bool,
}

impl CheckDefinition {
    pub const fn new(symbol: &'static str, label: &'static str, default_enabled: bool) -> Self {
        Self {
            symbol,
            label,
            default_enabled,
        }
    }
}

/// Classification rule: a pure function from a snapshot to flagged elements.
pub type CheckRule = fn(&MeshSnapshot) -> ElementSets;

pub const TRIS: CheckDefinition = CheckDefinition::new("tris", "Tris", true);
pub const NGONS: CheckDefinition = CheckDefinition::new("ngons", "Ngons", true);
pub const INTERIOR_FACES: CheckDefinition =
    CheckDefinition::new("interior_faces", "Interior Faces", true);
pub const NONMANIFOLD: CheckDefinition =
    CheckDefinition::new("nonmanifold", "Nonmanifold Elements", true);
pub const SIXPLUS_POLES: CheckDefinition =
    CheckDefinition::new("sixplus_poles", "6+-edge Poles", false);

static BUILTIN: Lazy<CheckRegistry> = Lazy::new(|| {
    let mut registry = CheckRegistry::new();
    registry.register(TRIS, checks::tris);
    registry.register(NGONS, checks::ngons);
    registry.register(INTERIOR_FACES, checks::interior_faces);
    registry.register(NONMANIFOLD, checks::nonmanifold);
    registry.register(SIXPLUS_POLES, checks::sixplus_poles);
    registry
});

/// A definition bound to its rule.
#[derive(Clone, Copy, Debug)]
pub struct RegisteredCheck {
    pub definition: CheckDefinition,
    pub rule: CheckRule,
}

/// Ordered, append-only list of checks.
#[derive(Clone, Debug, Default)]
pub struct CheckRegistry {
    checks: Vec<RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard checks: tris, ngons, interior faces, nonmanifold elements, 6+-edge poles.
    pub fn builtin() -> &'static CheckRegistry {
        &BUILTIN
    }

    /// Appends a check.
    ///
    /// Returns `false` and leaves the registry untouched if the symbol is
    /// already registered.
    pub fn register(&mut self, definition: CheckDefinition, rule: CheckRule) -> bool {
        if self.get(definition.symbol).is_some() {
            return false;
        }
        self.checks.push(RegisteredCheck { definition, rule });
        true
    }

    pub fn checks(&self) -> &[RegisteredCheck] {
        &self.checks
    }

    /// Definitions in registry order.
    pub fn definitions(&self) -> impl Iterator<Item = &CheckDefinition> + '_ {
        self.checks.iter().map(|c| &c.definition)
    }

    pub fn get(&self, symbol: &str) -> Option<&RegisteredCheck> {
        self.checks.iter().find(|c| c.definition.symbol == symbol)
    }

    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.checks.iter().position(|c| c.definition.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

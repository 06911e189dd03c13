//! Per-session lint configuration.
//!
//! Hosts keep one [`LintConfig`] per scene/session, flip toggles from their
//! UI and pass it into every analysis. The core keeps no global toggle
//! state. Persisting the config is up to the host; it round-trips through
//! any serde format.

use std::collections::BTreeSet;

use crate::lint::registry::CheckRegistry;

/// Enabled check symbols plus the continuous-checking flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LintConfig {
    enabled: BTreeSet<String>,
    /// Whether the host should run the live check on every edit tick.
    pub live: bool,
}

impl LintConfig {
    /// Config with exactly the registry's default-enabled checks turned on.
    pub fn from_registry(registry: &CheckRegistry) -> Self {
        Self {
            enabled: registry
                .definitions()
                .filter(|d| d.default_enabled)
                .map(|d| d.symbol.to_string())
                .collect(),
            live: false,
        }
    }

    /// Config with every check of `registry` turned on.
    pub fn all(registry: &CheckRegistry) -> Self {
        Self {
            enabled: registry.definitions().map(|d| d.symbol.to_string()).collect(),
            live: false,
        }
    }

    /// Config with only the given symbols turned on.
    pub fn with_enabled<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: symbols.into_iter().map(Into::into).collect(),
            live: false,
        }
    }

    pub fn is_enabled(&self, symbol: &str) -> bool {
        self.enabled.contains(symbol)
    }

    /// Sets one toggle. Returns the previous state.
    pub fn set_enabled(&mut self, symbol: &str, enabled: bool) -> bool {
        if enabled {
            !self.enabled.insert(symbol.to_string())
        } else {
            self.enabled.remove(symbol)
        }
    }

    pub fn enable(&mut self, symbol: &str) -> &mut Self {
        self.set_enabled(symbol, true);
        self
    }

    pub fn disable(&mut self, symbol: &str) -> &mut Self {
        self.set_enabled(symbol, false);
        self
    }

    /// The set passed to analysis.
    pub fn enabled_symbols(&self) -> &BTreeSet<String> {
        &self.enabled
    }
}

//! Romanization capability check.
//!
//! The process-wide probe combines the `romanization.enabled` setting with
//! whether the global table loaded. It runs once and is cached; a failed probe
//! means "unavailable" and every API degrades to pass-through.

use std::sync::OnceLock;

use tracing::debug;

use crate::settings::settings;
use crate::table::PinyinTable;

/// Decides whether romanization applies at all.
pub trait AvailabilityGate {
    fn is_available(&self) -> bool;
}

impl AvailabilityGate for bool {
    fn is_available(&self) -> bool {
        *self
    }
}

impl<F: Fn() -> bool> AvailabilityGate for F {
    fn is_available(&self) -> bool {
        self()
    }
}

/// Gate backed by the cached process-wide probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGate;

impl AvailabilityGate for SystemGate {
    fn is_available(&self) -> bool {
        romanization_available()
    }
}

/// Gate backed by the `romanization.enabled` setting alone, for resolvers
/// over an explicitly opened table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsGate;

impl AvailabilityGate for SettingsGate {
    fn is_available(&self) -> bool {
        settings().romanization.enabled
    }
}

/// Cached process-wide availability probe.
pub fn romanization_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        let enabled = settings().romanization.enabled;
        let loaded = enabled && PinyinTable::global().is_some();
        debug!(enabled, loaded, "romanization availability probed");
        loaded
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_gate() {
        assert!(true.is_available());
        assert!(!false.is_available());
    }

    #[test]
    fn closure_gate() {
        let enabled = false;
        let gate = move || enabled;
        assert!(!gate.is_available());
    }

    #[test]
    fn system_gate_matches_probe() {
        assert_eq!(SystemGate.is_available(), romanization_available());
        // Default settings enable romanization and the embedded table is valid.
        assert!(romanization_available());
    }

    #[test]
    fn settings_gate_follows_enabled_flag() {
        assert_eq!(SettingsGate.is_available(), settings().romanization.enabled);
    }
}

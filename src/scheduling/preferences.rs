//! Scheduling preferences, with defaults applied at construction (spec §3, §9
//! REDESIGN FLAGS: "Preference dictionary with implicit defaults").

use serde::{Deserialize, Serialize};

/// User-tunable weights and flags for schedule generation.
///
/// Deserializes from the request's `preferences` map (spec §6.2); any field
/// missing from the input falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preferences {
    pub no_marathons: i64,
    pub day_classes: i64,
    pub start_early: i64,
    /// Caller wants realtime open/closed and active/cancelled status considered.
    pub current_status: bool,
    /// Skip sections marked closed or cancelled.
    pub obey_status: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            no_marathons: 1,
            day_classes: 1,
            start_early: 1,
            current_status: false,
            obey_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_all_weights_to_one() {
        let prefs = Preferences::default();
        assert_eq!(prefs.no_marathons, 1);
        assert_eq!(prefs.day_classes, 1);
        assert_eq!(prefs.start_early, 1);
        assert!(!prefs.current_status);
        assert!(!prefs.obey_status);
    }

    #[test]
    fn partial_json_fills_remaining_defaults() {
        let prefs: Preferences =
            serde_json::from_value(serde_json::json!({"start-early": -10})).unwrap();
        assert_eq!(prefs.start_early, -10);
        assert_eq!(prefs.no_marathons, 1);
        assert_eq!(prefs.day_classes, 1);
    }
}

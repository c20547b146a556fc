//! Application configuration, loaded from the environment (mirrors
//! `App::new`'s `Figment::new().merge(Env::raw())` pattern).

use serde::Deserialize;

fn default_institution() -> String {
    "ualberta".to_owned()
}

fn default_num_schedules() -> usize {
    50
}

fn default_similarity_threshold() -> f64 {
    crate::scheduling::condenser::SIMILARITY_THRESHOLD
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// Policy knobs that sit outside the scheduling algorithm itself: how many
/// schedules to return, how aggressively to condense near-duplicates, which
/// catalog to default to, and how verbosely to log.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_institution")]
    pub institution: String,

    /// Caller-specified N is honored per-request (spec §4.8); this is the
    /// fallback when the caller doesn't specify one.
    #[serde(default = "default_num_schedules")]
    pub default_num_schedules: usize,

    /// Mirrors `Schedule.SIMILARITY_THRESHOLD` (spec §4.7): a tuning
    /// parameter for condensation, not part of the algorithm's contract.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            institution: default_institution(),
            default_num_schedules: default_num_schedules(),
            similarity_threshold: default_similarity_threshold(),
            log_level: default_log_level(),
        }
    }
}

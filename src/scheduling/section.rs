//! The section input record (spec §3).
//!
//! Modeled as a plain struct with `Option` fields rather than dynamic
//! string-keyed access (spec §9 REDESIGN FLAGS: "Dynamic record access via
//! string keys").

use serde::{Deserialize, Serialize};

/// A single offering of a course component, as consumed from the catalog port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub course: String,
    pub component: String,
    pub section: String,
    /// Globally unique human label; used as the SAT-domain key.
    pub as_string: String,
    /// Day letters drawn from `"MTWRF"`, e.g. `"MWF"`. Absent for sections with no meeting time.
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Cross-component dependency: the sibling section identifier this section auto-enrolls.
    #[serde(default)]
    pub auto_enroll: Option<String>,
    /// The component name the `auto_enroll` sibling belongs to.
    #[serde(default)]
    pub auto_enroll_component: Option<String>,
    #[serde(default)]
    pub class_status: Option<String>,
    #[serde(default)]
    pub enroll_status: Option<String>,
}

impl Section {
    /// Whether this section carries enough data to be placed on a timetable.
    pub fn is_placeable(&self) -> bool {
        self.day.is_some() && self.start_time.is_some() && self.end_time.is_some()
    }

    /// Closed/cancelled per `classStatus`/`enrollStatus`, treating absence as open/active
    /// (spec §3).
    pub fn is_closed_or_cancelled(&self) -> bool {
        self.class_status.as_deref() == Some("X") || self.enroll_status.as_deref() == Some("C")
    }
}

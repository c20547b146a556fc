//! The `Schedule` aggregate: accepted sections, busy times, and the
//! timetable they project onto (spec §3).

use tracing::error;

use super::errors::PlacementError;
use super::preferences::Preferences;
use super::scorer::{self, ScoreSet};
use super::section::Section;
use super::timetable::{Marker, Timetable, place_section};

/// A candidate weekly schedule: accepted sections, the timetable they
/// produce, and bookkeeping for condensation and preference scoring.
#[derive(Debug, Clone)]
pub struct Schedule {
    sections: Vec<Section>,
    busy_times: Vec<Section>,
    timetable: Timetable,
    more_like_this: Vec<String>,
    preferences: Preferences,
}

impl Schedule {
    /// An empty schedule with default preferences.
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default())
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            sections: Vec::new(),
            busy_times: Vec::new(),
            timetable: Timetable::new(),
            more_like_this: Vec::new(),
            preferences,
        }
    }

    /// Builds a schedule from initial sections and busy times, as the
    /// constructor in the source does (`Schedule(sections=..., busy_times=...)`).
    pub fn from_parts(
        sections: impl IntoIterator<Item = Section>,
        busy_times: impl IntoIterator<Item = Section>,
        preferences: Preferences,
    ) -> Self {
        let mut schedule = Self::with_preferences(preferences);
        for busy_time in busy_times {
            schedule.add_busy_time(busy_time);
        }
        for section in sections {
            schedule.add_section(section);
        }
        schedule
    }

    /// Attempts to place `section` on the timetable, then unconditionally
    /// appends it to the section list regardless of success (spec §4.5: "the
    /// SAT model already enforced feasibility, so this is purely about data
    /// sparsity").
    pub fn add_section(&mut self, section: Section) -> &mut Self {
        let index = self.sections.len();
        if let Err(err) = self.place(&section, Marker::Section(index)) {
            tracing::debug!(section = %section.as_string, %err, "section has no placeable block info");
        }
        self.sections.push(section);
        self
    }

    /// Attempts to place `busy_time` on the timetable. Unlike `add_section`,
    /// a busy time is only retained if placement succeeds.
    pub fn add_busy_time(&mut self, busy_time: Section) -> &mut Self {
        match self.place(&busy_time, Marker::Busy) {
            Ok(()) => self.busy_times.push(busy_time),
            Err(err) => error!(busy_time = %busy_time.as_string, %err, "failed to schedule busy time"),
        }
        self
    }

    fn place(&mut self, section: &Section, marker: Marker) -> Result<(), PlacementError> {
        place_section(&mut self.timetable, section, marker)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn busy_times(&self) -> &[Section] {
        &self.busy_times
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn more_like_this(&self) -> &[String] {
        &self.more_like_this
    }

    pub fn push_more_like_this(&mut self, identifier: String) {
        self.more_like_this.push(identifier);
    }

    pub fn num_similar_schedules(&self) -> usize {
        self.more_like_this.len()
    }

    /// Clones this schedule's sections, busy times, and preferences into a
    /// fresh schedule, recomputing the timetable from scratch (spec §3
    /// lifecycle note). `more_like_this` is not carried over, matching the
    /// source's `clone()` constructing a brand new `Schedule(...)`.
    pub fn clone_fresh(&self) -> Self {
        Self::from_parts(
            self.sections.clone(),
            self.busy_times.clone(),
            self.preferences.clone(),
        )
    }

    /// Computes all three preference scores plus `overall` (spec §4.6). Lazy:
    /// nothing is computed until this is called.
    pub fn scores(&self) -> ScoreSet {
        scorer::score(self)
    }

    pub fn overall_score(&self) -> f64 {
        self.scores().overall
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

//! Conflict detection: time overlap plus cross-component auto-enroll
//! dependency links (spec §4.2).

use super::schedule::Schedule;
use super::section::Section;
use super::timetable::{Marker, NUM_DAYS, Timetable, place_section};

/// True iff `section` conflicts with `schedule`, by time or by dependency.
pub fn conflicts(schedule: &Schedule, section: &Section) -> bool {
    has_timetable_conflict(schedule, section) || has_dependency_conflict(schedule, section)
}

/// Builds a scratch timetable containing only `section`'s own blocks, then
/// checks its bitmap against `schedule`'s for any overlapping bit (spec §4.2).
fn has_timetable_conflict(schedule: &Schedule, section: &Section) -> bool {
    let mut scratch = Timetable::new();
    // A section with missing day/time info places nothing and can never
    // produce a time conflict, matching `Schedule(section)` on an unplaceable
    // section (the placement attempt fails silently).
    let _ = place_section(&mut scratch, section, Marker::Section(0));
    (0..NUM_DAYS).any(|day| scratch.bitmap(day) & schedule.timetable().bitmap(day) != 0)
}

/// Checks `section` against every already-accepted section sharing its
/// course but a different component, for an unsatisfied `autoEnroll` link
/// (spec §4.2).
fn has_dependency_conflict(schedule: &Schedule, section: &Section) -> bool {
    schedule
        .sections()
        .iter()
        .filter(|other| other.course == section.course && other.component != section.component)
        .any(|other| !link_satisfied(section, other))
}

/// Whether the cross-component `autoEnroll` link between `section` and
/// `other` (a different-component sibling in the same course) is satisfied.
///
/// Per spec §4.2, the pair is unrelated (and thus compatible) whenever
/// neither side declares an `autoEnroll` link, or the declared
/// `autoEnrollComponent` doesn't name the other's actual component.
fn link_satisfied(section: &Section, other: &Section) -> bool {
    if section.auto_enroll.is_none() && other.auto_enroll.is_none() {
        return true;
    }
    let names_others_component = section.auto_enroll_component.as_deref() == Some(&other.component);
    let others_names_this_component =
        other.auto_enroll_component.as_deref() == Some(&section.component);
    if !names_others_component && !others_names_this_component {
        return true;
    }
    section.auto_enroll.as_deref() == Some(&other.section)
        || other.auto_enroll.as_deref() == Some(&section.section)
}

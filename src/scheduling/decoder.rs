//! Maps a SAT satisfying assignment back to a `Schedule` (spec §4.5).

use super::preferences::Preferences;
use super::sat::SatIndex;
use super::schedule::Schedule;
use super::section::Section;

/// Builds a schedule from one satisfying assignment: positive literals name
/// the chosen sections, which are added to a schedule already seeded with
/// `busy_times` and `preferences`.
pub fn decode(
    assignment: &[i32],
    index: &SatIndex,
    busy_times: &[Section],
    preferences: &Preferences,
) -> Schedule {
    let chosen = assignment
        .iter()
        .filter(|&&literal| literal > 0)
        .filter_map(|&literal| index.section_of(literal).cloned());

    Schedule::from_parts(chosen, busy_times.iter().cloned(), preferences.clone())
}

/// Decodes every satisfying assignment into its own schedule.
pub fn decode_all(
    assignments: &[Vec<i32>],
    index: &SatIndex,
    busy_times: &[Section],
    preferences: &Preferences,
) -> Vec<Schedule> {
    assignments
        .iter()
        .map(|assignment| decode(assignment, index, busy_times, preferences))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sat::encode;

    fn section(course: &str, component: &str, sec: &str, day: &str, start: &str, end: &str) -> Section {
        Section {
            course: course.to_owned(),
            component: component.to_owned(),
            section: sec.to_owned(),
            as_string: format!("{course} {component} {sec}"),
            day: Some(day.to_owned()),
            start_time: Some(start.to_owned()),
            end_time: Some(end.to_owned()),
            auto_enroll: None,
            auto_enroll_component: None,
            class_status: None,
            enroll_status: None,
        }
    }

    #[test]
    fn decode_adds_only_chosen_sections() {
        let sections = vec![
            section("CS101", "LEC", "A1", "M", "09:00 AM", "09:50 AM"),
            section("CS101", "LEC", "A2", "T", "09:00 AM", "09:50 AM"),
        ];
        let (index, _clauses) = encode(&sections, &[]);
        let assignment = vec![1, -2];
        let schedule = decode(&assignment, &index, &[], &Preferences::default());
        assert_eq!(schedule.sections().len(), 1);
        assert_eq!(schedule.sections()[0].section, "A1");
    }

    #[test]
    fn decode_all_produces_one_schedule_per_assignment() {
        let sections = vec![section("CS101", "LEC", "A1", "M", "09:00 AM", "09:50 AM")];
        let (index, _clauses) = encode(&sections, &[]);
        let assignments = vec![vec![1], vec![-1]];
        let schedules = decode_all(&assignments, &index, &[], &Preferences::default());
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].sections().len(), 1);
        assert_eq!(schedules[1].sections().len(), 0);
    }
}

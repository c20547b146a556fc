//! End-to-end scenarios against the in-memory catalog (spec §8 scenario table).

use classgen::scheduling::catalog::CatalogPort;
use classgen::scheduling::orchestrator::Electives;
use classgen::scheduling::sat::BacktrackingSolver;
use classgen::scheduling::{FindSchedulesRequest, InMemoryCatalog, Preferences, Section, find_schedules};

fn section(
    course: &str,
    component: &str,
    sec: &str,
    day: &str,
    start: &str,
    end: &str,
) -> Section {
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

fn busy(day: &str, start: &str, end: &str) -> Section {
    Section {
        course: "BUSY".to_owned(),
        component: "BUSY".to_owned(),
        section: "1".to_owned(),
        as_string: format!("BUSY {day} {start}"),
        day: Some(day.to_owned()),
        start_time: Some(start.to_owned()),
        end_time: Some(end.to_owned()),
        auto_enroll: None,
        auto_enroll_component: None,
        class_status: None,
        enroll_status: None,
    }
}

/// Scenario 1: a single course with a lecture/lab pair linked by
/// `autoEnroll`, both sections of which must come back paired correctly.
#[test]
fn single_course_respects_auto_enroll_pairing() {
    let mut catalog = InMemoryCatalog::new();
    let mut lecture = section("105005", "LEC", "A1", "MWF", "09:00 AM", "09:50 AM");
    lecture.auto_enroll = Some("B1".to_owned());
    lecture.auto_enroll_component = Some("LAB".to_owned());
    let right_lab = section("105005", "LAB", "B1", "T", "01:00 PM", "01:50 PM");
    let wrong_lab = section("105005", "LAB", "B2", "R", "02:00 PM", "02:50 PM");
    catalog.load_term("1530", vec![lecture, right_lab, wrong_lab]);

    let request = FindSchedulesRequest {
        term: Some("1530".to_owned()),
        courses: vec!["105005".to_owned()],
        ..Default::default()
    };
    let schedules = find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0);

    assert!(!schedules.is_empty());
    for schedule in &schedules {
        let lec = schedule
            .sections()
            .iter()
            .find(|s| s.component == "LEC")
            .expect("lecture present");
        let lab = schedule
            .sections()
            .iter()
            .find(|s| s.component == "LAB")
            .expect("lab present");
        assert_eq!(lab.section, "B1", "SAT model must pick the linked lab");
        assert_eq!(lec.auto_enroll.as_deref(), Some(lab.section.as_str()));
    }
}

/// Scenario 2: a busy time blocks out Mon/Wed/Fri afternoon; no surviving
/// schedule may place a section in that window.
#[test]
fn busy_time_excludes_overlapping_sections() {
    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(
        "1490",
        vec![
            section("001343", "LEC", "A1", "MWF", "09:00 AM", "09:50 AM"),
            section("001343", "LEC", "A2", "MWF", "04:30 PM", "05:20 PM"),
            section("009019", "LEC", "B1", "T", "01:00 PM", "01:50 PM"),
        ],
    );

    let request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["001343".to_owned(), "009019".to_owned()],
        busy_times: vec![busy("MWF", "04:00 PM", "06:00 PM")],
        ..Default::default()
    };
    let schedules = find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0);

    assert!(!schedules.is_empty());
    for schedule in &schedules {
        let a2 = schedule.sections().iter().find(|s| s.section == "A2");
        assert!(a2.is_none(), "the 4:30-5:20pm MWF section conflicts with the busy time");
    }
}

/// Scenario 4: busy times covering the entire teaching day across all
/// sections' meeting times yields zero schedules.
#[test]
fn busy_times_covering_all_sections_yield_zero_schedules() {
    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(
        "1490",
        vec![
            section("CHEM101", "LEC", "A1", "MWF", "07:00 AM", "07:50 AM"),
            section("PHYS124", "LEC", "B1", "TR", "04:00 PM", "05:20 PM"),
        ],
    );

    let request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["CHEM101".to_owned(), "PHYS124".to_owned()],
        busy_times: vec![
            busy("MWF", "07:00 AM", "09:50 AM"),
            busy("TR", "04:00 PM", "10:00 PM"),
        ],
        ..Default::default()
    };
    let schedules = find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0);

    assert!(schedules.is_empty());
}

/// Scenario 5: one elective group; each merged schedule carries sections
/// from exactly one elective course alongside the mandatory course.
#[test]
fn elective_group_contributes_exactly_one_course_per_schedule() {
    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(
        "1490",
        vec![
            section("CHEM101", "LEC", "A1", "M", "09:00 AM", "09:50 AM"),
            section("ART100", "LEC", "X1", "T", "09:00 AM", "09:50 AM"),
            section("MUS100", "LEC", "Y1", "W", "09:00 AM", "09:50 AM"),
            section("PHIL100", "LEC", "Z1", "R", "09:00 AM", "09:50 AM"),
        ],
    );

    let request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["CHEM101".to_owned()],
        electives: vec![Electives {
            courses: vec![
                "ART100".to_owned(),
                "MUS100".to_owned(),
                "PHIL100".to_owned(),
            ],
        }],
        ..Default::default()
    };
    let schedules = find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0);

    assert!(!schedules.is_empty());
    for schedule in &schedules {
        let elective_course_count = schedule
            .sections()
            .iter()
            .filter(|s| s.course != "CHEM101")
            .count();
        assert_eq!(elective_course_count, 1);
    }
}

/// Scenario 6: flipping `start-early`/`no-marathons` to negative weights
/// reorders results toward later starts without changing feasibility.
#[test]
fn negative_start_early_weight_prefers_a_later_first_schedule() {
    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(
        "1490",
        vec![
            section("CHEM101", "LEC", "A1", "M", "08:00 AM", "08:50 AM"),
            section("CHEM101", "LEC", "A2", "M", "03:00 PM", "03:50 PM"),
        ],
    );

    let default_request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["CHEM101".to_owned()],
        ..Default::default()
    };
    let default_result = find_schedules(&default_request, &catalog, &BacktrackingSolver, 50, 1.0);

    let inverted_request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["CHEM101".to_owned()],
        preferences: Preferences {
            start_early: -10,
            no_marathons: -10,
            ..Preferences::default()
        },
        ..Default::default()
    };
    let inverted_result = find_schedules(&inverted_request, &catalog, &BacktrackingSolver, 50, 1.0);

    assert_eq!(default_result[0].sections()[0].section, "A1");
    assert_eq!(inverted_result[0].sections()[0].section, "A2");
}

#[test]
fn empty_courses_request_returns_empty() {
    let catalog = InMemoryCatalog::new();
    let request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        ..Default::default()
    };
    assert!(find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0).is_empty());
}

#[test]
fn schedule_identifiers_feed_into_more_like_this() {
    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(
        "1490",
        vec![section("CHEM101", "LEC", "A1", "M", "09:00 AM", "09:50 AM")],
    );
    let request = FindSchedulesRequest {
        term: Some("1490".to_owned()),
        courses: vec!["CHEM101".to_owned()],
        ..Default::default()
    };
    let schedules = find_schedules(&request, &catalog, &BacktrackingSolver, 50, 1.0);
    assert_eq!(schedules.len(), 1);
    // A single feasible assignment means nothing to condense against.
    assert!(schedules[0].more_like_this().is_empty());
    let _ = catalog.get_schedule_identifier(&schedules[0]);
}

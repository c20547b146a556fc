//! `find_schedules`: composes the encoder, solver, decoder, scorer, and
//! condenser for a mandatory course set and, separately, each elective group
//! (spec §4.8).

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::catalog::CatalogPort;
use super::condenser::condense_with_threshold;
use super::decoder::decode_all;
use super::errors::CatalogError;
use super::preferences::Preferences;
use super::sat::{SatSolver, encode};
use super::schedule::Schedule;
use super::section::Section;

/// One elective group: the caller picks a section from exactly one course
/// within the group, tried independently against the mandatory pool (spec
/// §6.2).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Electives {
    pub courses: Vec<String>,
}

/// The request shape consumed by the orchestrator (spec §6.2). Field
/// defaults mirror the recognized request fields table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FindSchedulesRequest {
    pub term: Option<String>,
    pub institution: String,
    pub courses: Vec<String>,
    pub busy_times: Vec<Section>,
    pub electives: Vec<Electives>,
    pub preferences: Preferences,
}

impl Default for FindSchedulesRequest {
    fn default() -> Self {
        Self {
            term: None,
            institution: "ualberta".to_owned(),
            courses: Vec::new(),
            busy_times: Vec::new(),
            electives: Vec::new(),
            preferences: Preferences::default(),
        }
    }
}

/// Runs the full pipeline for `request` against `catalog` and `solver`,
/// returning up to `num_schedules` schedules sorted by `overall_score`
/// descending (spec §4.8).
///
/// Missing `term` or empty `courses` yields an empty result without
/// consulting the catalog (spec §4.8 "Failure semantics", spec §7).
pub fn find_schedules(
    request: &FindSchedulesRequest,
    catalog: &impl CatalogPort,
    solver: &impl SatSolver,
    num_schedules: usize,
    similarity_threshold: f64,
) -> Vec<Schedule> {
    let Some(term) = request.term.as_deref().filter(|t| !t.is_empty()) else {
        warn!("find_schedules called with no term; returning empty result");
        return Vec::new();
    };
    if request.courses.is_empty() {
        warn!("find_schedules called with no mandatory courses; returning empty result");
        return Vec::new();
    }

    let mandatory_pool = match resolve_pool(catalog, term, &request.courses, &request.preferences) {
        Ok(pool) => pool,
        Err(err) => {
            warn!(%err, %term, "catalog lookup failed for mandatory courses");
            return Vec::new();
        }
    };

    let mandatory_schedules = run_pool(&mandatory_pool, request, solver);
    info!(
        count = mandatory_schedules.len(),
        term, "mandatory pass produced schedules"
    );

    // Mirrors `_schedule_electives`: mandatory-only schedules are returned
    // only when there are no elective groups at all. Once electives are
    // requested, every returned schedule must carry exactly one elective
    // course (spec §8 scenario 5), so the bare mandatory pass is discarded
    // in favor of the per-elective merges below.
    let mut schedules = if request.electives.is_empty() {
        mandatory_schedules
    } else {
        Vec::new()
    };

    for group in &request.electives {
        for course in &group.courses {
            let elective_sections = match resolve_pool(
                catalog,
                term,
                std::slice::from_ref(course),
                &request.preferences,
            ) {
                Ok(sections) => sections,
                Err(err) => {
                    warn!(%err, %term, %course, "catalog lookup failed for elective course");
                    continue;
                }
            };

            let mut candidate_pool = mandatory_pool.clone();
            candidate_pool.extend(elective_sections);

            let elective_schedules = run_pool(&candidate_pool, request, solver);
            debug!(
                count = elective_schedules.len(),
                course, "elective pass produced schedules"
            );
            schedules.extend(elective_schedules);
        }
    }

    let mut condensed = condense_with_threshold(schedules, similarity_threshold, |schedule| {
        catalog.get_schedule_identifier(schedule)
    });

    // Open Question 4 (spec §9): the condenser's own output is still in
    // ascending order; the public boundary re-sorts descending once here.
    condensed.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));
    condensed.truncate(num_schedules);
    condensed
}

/// Resolves `courses` through the catalog into a single flattened candidate
/// pool, applying `obey-status` filtering if requested (spec §3, §4.8).
fn resolve_pool(
    catalog: &impl CatalogPort,
    term: &str,
    courses: &[String],
    preferences: &Preferences,
) -> Result<Vec<Section>, CatalogError> {
    let components_per_course =
        catalog.course_components(term, courses, false, preferences.current_status)?;

    Ok(components_per_course
        .into_iter()
        .flatten()
        .flatten()
        .filter(|section| !(preferences.obey_status && section.is_closed_or_cancelled()))
        .collect())
}

/// Encodes, solves, decodes, and scores `candidate_sections` into schedules
/// against `request`'s busy times and preferences (spec §4.3-§4.6). Returns
/// an empty list on an unsatisfiable instance (spec §7).
fn run_pool(
    candidate_sections: &[Section],
    request: &FindSchedulesRequest,
    solver: &impl SatSolver,
) -> Vec<Schedule> {
    let (index, clauses) = encode(candidate_sections, &request.busy_times);
    let assignments = solver.all_solutions(&clauses, index.num_variables());
    if assignments.is_empty() {
        debug!("SAT instance unsatisfiable; no schedules produced for this pool");
    }
    decode_all(
        &assignments,
        &index,
        &request.busy_times,
        &request.preferences,
    )
}

//! CNF encoding of the section-selection problem, and the pluggable
//! all-solutions solver adapter (spec §4.3, §4.4).

use indexmap::IndexMap;

use super::conflict;
use super::preferences::Preferences;
use super::schedule::Schedule;
use super::section::Section;

/// A disjunction of signed literals; positive means "this section is chosen".
pub type Clause = Vec<i32>;

/// Bidirectional mapping between sections (the input domain) and positive
/// integers (the SAT domain), per spec §3 "SAT index".
#[derive(Debug, Clone)]
pub struct SatIndex {
    by_variable: Vec<Section>,
    by_as_string: IndexMap<String, i32>,
}

impl SatIndex {
    fn build(sections: &[Section]) -> Self {
        let mut by_variable = Vec::with_capacity(sections.len());
        let mut by_as_string = IndexMap::with_capacity(sections.len());
        for (offset, section) in sections.iter().enumerate() {
            let variable = (offset + 1) as i32;
            by_as_string.insert(section.as_string.clone(), variable);
            by_variable.push(section.clone());
        }
        Self {
            by_variable,
            by_as_string,
        }
    }

    pub fn variable_of(&self, as_string: &str) -> Option<i32> {
        self.by_as_string.get(as_string).copied()
    }

    /// Looks up the section a (1-based, positive) SAT variable represents.
    pub fn section_of(&self, variable: i32) -> Option<&Section> {
        debug_assert!(variable > 0, "SAT variables are 1-based and positive");
        self.by_variable.get((variable - 1) as usize)
    }

    pub fn num_variables(&self) -> usize {
        self.by_variable.len()
    }
}

/// Encodes `sections` (a flattened candidate pool, spec §4.8) against
/// `busy_times` into a `SatIndex` plus the clauses of spec §4.3.
pub fn encode(sections: &[Section], busy_times: &[Section]) -> (SatIndex, Vec<Clause>) {
    let index = SatIndex::build(sections);
    let mut clauses = Vec::new();

    // 1. Component coverage: one positive clause per (course, component) group,
    // in first-seen order for deterministic output.
    let mut groups: IndexMap<(&str, &str), Clause> = IndexMap::new();
    for (offset, section) in sections.iter().enumerate() {
        let variable = (offset + 1) as i32;
        groups
            .entry((section.course.as_str(), section.component.as_str()))
            .or_default()
            .push(variable);
    }
    clauses.extend(groups.into_values());

    // 2. Self-exclusion: a section that alone overlaps the busy-times bitmap
    // can never be chosen (spec §4.3 point 3, resolving Open Question 2).
    let busy_only = Schedule::from_parts(
        std::iter::empty(),
        busy_times.iter().cloned(),
        Preferences::default(),
    );
    for (offset, section) in sections.iter().enumerate() {
        if conflict::conflicts(&busy_only, section) {
            clauses.push(vec![-((offset + 1) as i32)]);
        }
    }

    // 3. Pairwise conflict: every ordered (i, j) with i < j (spec §4.3 point 2).
    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            if pairwise_conflicts(&sections[i], &sections[j], busy_times) {
                clauses.push(vec![-((i + 1) as i32), -((j + 1) as i32)]);
            }
        }
    }

    (index, clauses)
}

/// Two sections conflict as a pair when they share a (course, component), or
/// when one alone conflicts with busy times, or the other conflicts once the
/// first is added (spec §4.3 point 2; mirrors the source's `_conflicts`).
fn pairwise_conflicts(a: &Section, b: &Section, busy_times: &[Section]) -> bool {
    if a.course == b.course && a.component == b.component {
        return true;
    }
    let mut scratch = Schedule::from_parts(
        std::iter::empty(),
        busy_times.iter().cloned(),
        Preferences::default(),
    );
    if conflict::conflicts(&scratch, a) {
        return true;
    }
    scratch.add_section(a.clone());
    conflict::conflicts(&scratch, b)
}

/// The SAT solver adapter port (spec §4.4). Deliberately a trait: per the
/// spec's component-share table the solver is an external dependency, not
/// part of the core's line budget.
pub trait SatSolver {
    /// Enumerates every satisfying assignment as a list of signed literals
    /// (positive = chosen), one `Vec` per solution. No ordering is guaranteed.
    fn all_solutions(&self, clauses: &[Clause], num_variables: usize) -> Vec<Vec<i32>>;
}

/// A small in-process DPLL backtracking solver used as the default `SatSolver`.
///
/// Not a production SAT engine (no clause learning, no watched literals) --
/// a reference implementation of the `itersolve`-style all-solutions contract
/// that needs no native toolchain. See `DESIGN.md` for why this crate doesn't
/// bind to a real CNF solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl SatSolver for BacktrackingSolver {
    fn all_solutions(&self, clauses: &[Clause], num_variables: usize) -> Vec<Vec<i32>> {
        let mut solutions = Vec::new();
        let mut assignment = vec![0i8; num_variables + 1];
        search(clauses, num_variables, 1, &mut assignment, &mut solutions);
        solutions
    }
}

fn search(
    clauses: &[Clause],
    num_variables: usize,
    variable: usize,
    assignment: &mut [i8],
    solutions: &mut Vec<Vec<i32>>,
) {
    if variable > num_variables {
        solutions.push(
            (1..=num_variables)
                .map(|v| if assignment[v] > 0 { v as i32 } else { -(v as i32) })
                .collect(),
        );
        return;
    }
    for candidate in [1i8, -1i8] {
        assignment[variable] = candidate;
        if is_consistent(clauses, assignment, variable) {
            search(clauses, num_variables, variable + 1, assignment, solutions);
        }
    }
    assignment[variable] = 0;
}

/// True iff every clause whose variables are *all* decided up to `frontier`
/// is satisfied. Clauses with still-unassigned variables are skipped (they
/// may yet be satisfied as the search continues).
fn is_consistent(clauses: &[Clause], assignment: &[i8], frontier: usize) -> bool {
    clauses.iter().all(|clause| {
        let fully_assigned = clause
            .iter()
            .all(|&lit| (lit.unsigned_abs() as usize) <= frontier);
        !fully_assigned
            || clause.iter().any(|&lit| {
                let var = lit.unsigned_abs() as usize;
                let desired = if lit > 0 { 1 } else { -1 };
                assignment[var] == desired
            })
    })
}

//! The catalog port (spec §6.1): the core's read-only view onto term/course
//! data and identifier minting, both treated as external collaborators (spec
//! §1). Modeled as a narrow trait boundary, matching the teacher's pattern of
//! wrapping an external system behind a small trait (c.f. `banner::BannerApi`
//! as the API client boundary).

use super::errors::CatalogError;
use super::schedule::Schedule;
use super::section::Section;
use std::collections::HashMap;

/// A course's sections, grouped by component in first-seen order. Each inner
/// `Vec<Section>` is one component (spec §6.1: "a list of components; each
/// component is a list of sections").
pub type Components = Vec<Vec<Section>>;

/// Read-only catalog access, consumed by `orchestrator::find_schedules`.
///
/// Implementations own whatever persistence or network access backs them;
/// the core never retries a failed lookup (spec §7).
pub trait CatalogPort {
    /// Resolves `course_ids` within `term` into one `Components` list per
    /// course. `single` means `course_ids` names exactly one course rather
    /// than a list (spec §6.1); `current_status` requests realtime
    /// `classStatus`/`enrollStatus` enrichment.
    fn course_components(
        &self,
        term: &str,
        course_ids: &[String],
        single: bool,
        current_status: bool,
    ) -> Result<Vec<Components>, CatalogError>;

    /// An opaque, stable identifier for `schedule`, recorded verbatim into a
    /// neighbor's `more_like_this` during condensation (spec §4.7). The core
    /// never interprets this value.
    fn get_schedule_identifier(&self, schedule: &Schedule) -> String;
}

/// A toy catalog backed by an in-memory term -> course -> sections map, used
/// by the CLI entry point and by tests in place of a real persistence layer
/// (spec §1 scopes "catalog persistence... and its retrieval interface" out
/// of the core).
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    /// `term -> flat list of every section offered that term`.
    terms: HashMap<String, Vec<Section>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads sections for `term`, replacing any previously loaded set.
    pub fn load_term(&mut self, term: impl Into<String>, sections: Vec<Section>) -> &mut Self {
        self.terms.insert(term.into(), sections);
        self
    }

    fn sections_for(&self, term: &str, course: &str) -> Components {
        let Some(sections) = self.terms.get(term) else {
            return Vec::new();
        };

        // Group by component in first-seen order, matching `SatIndex`'s
        // deterministic, order-preserving grouping (`scheduling::sat`).
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<Section>> = HashMap::new();
        for section in sections.iter().filter(|s| s.course == course) {
            groups
                .entry(section.component.as_str())
                .or_insert_with(|| {
                    order.push(section.component.as_str());
                    Vec::new()
                })
                .push(section.clone());
        }
        order
            .into_iter()
            .map(|component| groups.remove(component).unwrap_or_default())
            .collect()
    }
}

impl CatalogPort for InMemoryCatalog {
    fn course_components(
        &self,
        term: &str,
        course_ids: &[String],
        single: bool,
        _current_status: bool,
    ) -> Result<Vec<Components>, CatalogError> {
        // This fixture-backed catalog has no realtime status feed to enrich
        // from, so `current_status` is accepted but a no-op here; a real
        // catalog implementation would overwrite `classStatus`/`enrollStatus`
        // on each returned section.
        let ids: &[String] = if single {
            &course_ids[..course_ids.len().min(1)]
        } else {
            course_ids
        };
        Ok(ids
            .iter()
            .map(|course| self.sections_for(term, course))
            .collect())
    }

    fn get_schedule_identifier(&self, schedule: &Schedule) -> String {
        // Opaque and stable for a given section set: the core never
        // interprets this value (spec §4.7), so a sorted join is as good as
        // a hash and keeps the fixture/test output legible.
        let mut as_strings: Vec<&str> = schedule
            .sections()
            .iter()
            .map(|section| section.as_string.as_str())
            .collect();
        as_strings.sort_unstable();
        as_strings.join("|")
    }
}

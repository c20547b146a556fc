//! Schedule-generation core (spec.md §2): a section/course catalog goes in,
//! ranked, conflict-free weekly schedules come out.
//!
//! Dataflow, leaves first: `timetable` is the atomic value; `conflict` builds
//! throwaway timetables to compare sections; `sat` encodes the filtered
//! section pool into CNF and enumerates satisfying assignments; `decoder`
//! turns each assignment into a `schedule::Schedule`; `scorer` ranks them;
//! `condenser` clusters near-duplicates; `orchestrator` composes all of the
//! above for mandatory courses and elective groups.

pub mod catalog;
pub mod condenser;
pub mod conflict;
pub mod decoder;
pub mod errors;
pub mod orchestrator;
pub mod preferences;
pub mod sat;
pub mod schedule;
pub mod scorer;
pub mod section;
pub mod timetable;

pub use catalog::{CatalogPort, InMemoryCatalog};
pub use errors::{CatalogError, DayParseError, MissingScheduleInfo, PlacementError, TimeParseError};
pub use orchestrator::{Electives, FindSchedulesRequest, find_schedules};
pub use preferences::Preferences;
pub use schedule::Schedule;
pub use section::Section;
pub use timetable::Timetable;

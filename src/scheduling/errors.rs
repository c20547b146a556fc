//! Error types for the scheduling core.

/// A time string failed to match the `HH:MM AM|PM` grammar (spec §6.4).
#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("time string {0:?} does not match \"HH:MM AM|PM\"")]
    Malformed(String),
    #[error("hour {0} in {1:?} is out of range 01..12")]
    HourOutOfRange(u32, String),
    #[error("minute {0} in {1:?} is out of range 00..59")]
    MinuteOutOfRange(u32, String),
}

/// A day letter was not one of `M`, `T`, `W`, `R`, `F`.
#[derive(Debug, thiserror::Error)]
#[error("day {0:?} is not one of \"MTWRF\"")]
pub struct DayParseError(pub char);

/// A section was missing one or more of `day`/`startTime`/`endTime`.
#[derive(Debug, thiserror::Error)]
#[error("section has no placeable timetable info")]
pub struct MissingScheduleInfo;

/// Errors surfaced by a catalog port implementation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Lookup(#[from] anyhow::Error),
}

/// Why a section or busy time could not be placed on a timetable (spec §7).
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    Missing(#[from] MissingScheduleInfo),
    #[error(transparent)]
    Time(#[from] TimeParseError),
    #[error(transparent)]
    Day(#[from] DayParseError),
}

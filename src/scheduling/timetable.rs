//! The timetable: a 5-day x 48-block grid, kept coherent with a per-day bitmap.
//!
//! See spec §4.1. Block `k` of a day occupies bit `NUM_BLOCKS - k - 1` of that
//! day's bitmap (bit 0 is the least significant bit of the `u64`), mirroring
//! the source's `1 << (NUM_BLOCKS-block-1)` placement.

use super::errors::{DayParseError, MissingScheduleInfo, PlacementError, TimeParseError};
use super::section::Section;

pub const NUM_BLOCKS: usize = 48;
pub const NUM_DAYS: usize = 5;
pub const DAYS: [char; NUM_DAYS] = ['M', 'T', 'W', 'R', 'F'];

/// Sentinel/marker for a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Busy,
    Section(usize),
}

/// A 5x48 grid plus its bitmap projection, always kept coherent (spec §3 invariant).
#[derive(Debug, Clone)]
pub struct Timetable {
    grid: [[Marker; NUM_BLOCKS]; NUM_DAYS],
    bitmap: [u64; NUM_DAYS],
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            grid: [[Marker::Open; NUM_BLOCKS]; NUM_DAYS],
            bitmap: [0; NUM_DAYS],
        }
    }
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self, day: usize) -> &[Marker; NUM_BLOCKS] {
        &self.grid[day]
    }

    pub fn bitmap(&self, day: usize) -> u64 {
        self.bitmap[day]
    }

    pub fn bitmaps(&self) -> [u64; NUM_DAYS] {
        self.bitmap
    }

    /// Sets the bitmap bits and grid cells for `[start_block, end_block]` (inclusive) on `day`.
    pub fn place(&mut self, day: usize, start_block: usize, end_block: usize, marker: Marker) {
        for block in start_block..=end_block {
            self.bitmap[day] |= 1u64 << (NUM_BLOCKS - block - 1);
            self.grid[day][block] = marker;
        }
    }

    /// True iff every grid cell agrees with its corresponding bitmap bit (spec §3 invariant).
    pub fn is_coherent(&self) -> bool {
        for day in 0..NUM_DAYS {
            for block in 0..NUM_BLOCKS {
                let bit_set = self.bitmap[day] & (1u64 << (NUM_BLOCKS - block - 1)) != 0;
                let cell_open = matches!(self.grid[day][block], Marker::Open);
                if bit_set == cell_open {
                    return false;
                }
            }
        }
        true
    }

    /// Converts a `"HH:MM AM|PM"` string to a block index in `0..NUM_BLOCKS` (spec §4.1, §6.4).
    pub fn block_of(time: &str) -> Result<usize, TimeParseError> {
        let (clock, ampm) = time
            .split_once(' ')
            .ok_or_else(|| TimeParseError::Malformed(time.to_owned()))?;
        let (hour_str, minute_str) = clock
            .split_once(':')
            .ok_or_else(|| TimeParseError::Malformed(time.to_owned()))?;
        if hour_str.len() != 2 || minute_str.len() != 2 {
            return Err(TimeParseError::Malformed(time.to_owned()));
        }
        let hour: u32 = hour_str
            .parse()
            .map_err(|_| TimeParseError::Malformed(time.to_owned()))?;
        let minute: u32 = minute_str
            .parse()
            .map_err(|_| TimeParseError::Malformed(time.to_owned()))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeParseError::HourOutOfRange(hour, time.to_owned()));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteOutOfRange(minute, time.to_owned()));
        }
        let ampm_offset: i32 = match (ampm, hour) {
            ("AM", 12) => -12,
            ("AM", _) => 0,
            ("PM", 12) => 0,
            ("PM", _) => 12,
            _ => return Err(TimeParseError::Malformed(time.to_owned())),
        };
        let block = 2 * (hour as i32 + ampm_offset) + (minute / 30) as i32;
        Ok(block as usize)
    }

    /// Converts a day letter in `"MTWRF"` to a day index `0..NUM_DAYS` (spec §4.1).
    pub fn day_of(day: char) -> Result<usize, DayParseError> {
        DAYS.iter()
            .position(|&d| d == day)
            .ok_or(DayParseError(day))
    }
}

/// Places a section (or busy time) on `timetable`, raising on the first
/// missing field or malformed time/day (spec §4.1, §7).
///
/// Mirrors `attempt_add_to_timetable`/`_add_to_timetable`: start/end are
/// parsed once, then each day letter is placed in turn. A malformed day
/// letter partway through `section.day` leaves earlier days already placed.
pub fn place_section(
    timetable: &mut Timetable,
    section: &Section,
    marker: Marker,
) -> Result<(), PlacementError> {
    let days = section.day.as_deref().ok_or(MissingScheduleInfo)?;
    let start_str = section.start_time.as_deref().ok_or(MissingScheduleInfo)?;
    let end_str = section.end_time.as_deref().ok_or(MissingScheduleInfo)?;

    let start = Timetable::block_of(start_str)?;
    let end = Timetable::block_of(end_str)?;

    for day_char in days.chars() {
        let day = Timetable::day_of(day_char)?;
        timetable.place(day, start, end, marker);
    }
    Ok(())
}

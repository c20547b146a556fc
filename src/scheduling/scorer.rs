//! The three preference functions plus `overall` (spec §4.6).

use super::schedule::Schedule;
use super::timetable::{Marker, NUM_BLOCKS, NUM_DAYS};

/// `08:00` and `17:00` in blocks, bounding the "daytime" window used by `day-classes`.
/// Matches the source's literal `night_zone` mask exactly: 16 leading bits, 14
/// trailing bits (an 8-hour, not 8.5-hour, daytime window).
const NIGHT_START_BLOCK: usize = 16; // 08:00 = 2 blocks/hr * 8
const NIGHT_END_BLOCK: usize = 34; // 17:00 = 2 blocks/hr * 17

/// Bits set outside `[08:00, 17:00)`: the first 16 blocks and the last 14.
const NIGHT_MASK: u64 = night_mask();

const fn night_mask() -> u64 {
    let mut mask = 0u64;
    let mut block = 0usize;
    while block < NUM_BLOCKS {
        if block < NIGHT_START_BLOCK || block >= NIGHT_END_BLOCK {
            mask |= 1u64 << (NUM_BLOCKS - block - 1);
        }
        block += 1;
    }
    mask
}

/// The four scores a schedule is ranked by (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSet {
    pub no_marathons: f64,
    pub day_classes: f64,
    pub start_early: f64,
    pub overall: f64,
}

/// Scores `schedule` against its own preference weights. A schedule with no
/// sections scores zero across the board (spec §4.6).
pub fn score(schedule: &Schedule) -> ScoreSet {
    if schedule.sections().is_empty() {
        return ScoreSet::default();
    }

    let preferences = schedule.preferences();
    let bitmaps = schedule.timetable().bitmaps();

    let no_marathons = weighted(preferences.no_marathons, || no_marathons_score(&bitmaps));
    let day_classes = weighted(preferences.day_classes, || day_classes_score(&bitmaps));
    let start_early = weighted(preferences.start_early, || start_early_score(schedule));

    ScoreSet {
        no_marathons,
        day_classes,
        start_early,
        overall: no_marathons + day_classes + start_early,
    }
}

/// A weight of exactly 0 short-circuits to 0 without invoking `f` (spec §4.6).
fn weighted(weight: i64, f: impl FnOnce() -> f64) -> f64 {
    if weight == 0 { 0.0 } else { weight as f64 * f() }
}

/// Length of the longest run of consecutive set bits in `bitmap`, found by
/// repeatedly ANDing the bitmap with its own left shift until it goes to zero
/// (spec §4.6): each iteration keeps only runs that are still at least that long.
fn longest_run(bitmap: u64) -> u32 {
    let mut run = bitmap;
    let mut length = 0u32;
    while run != 0 {
        length += 1;
        run &= run << 1;
    }
    length
}

/// Average consecutive-busy run length on `day`, counting a run as ended at
/// each `OPEN` cell (spec §9 Open Question 1 / `SPEC_FULL.md` §A): this
/// reproduces the source's `num_sessions`/`session_lengths` accounting
/// exactly, including that a day with zero `OPEN` blocks never flushes a
/// session and that a trailing run with no terminating `OPEN` block afterward
/// is dropped. Returns `0.0` for a fully-busy day instead of dividing `0/0`
/// (the one deliberate deviation from the source, which panics there).
fn average_session(grid: &[Marker; NUM_BLOCKS]) -> f64 {
    let mut session_length = 0u32;
    let mut session_lengths = 0u32;
    let mut num_sessions = 0u32;
    for marker in grid {
        if matches!(marker, Marker::Open) {
            session_lengths += session_length;
            num_sessions += 1;
            session_length = 0;
        } else {
            session_length += 1;
        }
    }
    if num_sessions == 0 {
        return 0.0;
    }
    session_lengths as f64 / num_sessions as f64
}

fn no_marathons_score(bitmaps: &[u64; NUM_DAYS]) -> f64 {
    let sum_of_longest: u32 = bitmaps.iter().map(|&bitmap| longest_run(bitmap)).sum();
    let average_length: f64 = (0..NUM_DAYS)
        .map(|day| average_session(&day_grid(bitmaps, day)))
        .sum::<f64>()
        / NUM_DAYS as f64;
    0.5 * ((30.0 - sum_of_longest as f64) + (4.0 - average_length))
}

/// Rebuilds a per-block `Marker` view from a bitmap alone (`Open`/non-`Open`
/// is all `average_session` needs; the exact non-open variant doesn't matter).
fn day_grid(bitmaps: &[u64; NUM_DAYS], day: usize) -> [Marker; NUM_BLOCKS] {
    let mut grid = [Marker::Open; NUM_BLOCKS];
    for (block, cell) in grid.iter_mut().enumerate() {
        let bit_set = bitmaps[day] & (1u64 << (NUM_BLOCKS - block - 1)) != 0;
        if bit_set {
            *cell = Marker::Busy;
        }
    }
    grid
}

fn day_classes_score(bitmaps: &[u64; NUM_DAYS]) -> f64 {
    let average_night_blocks: f64 = bitmaps
        .iter()
        .map(|&bitmap| (bitmap & NIGHT_MASK).count_ones() as f64)
        .sum::<f64>()
        / NUM_DAYS as f64;
    1.5 * (0.0 - average_night_blocks)
}

fn start_early_score(schedule: &Schedule) -> f64 {
    let timetable = schedule.timetable();
    let starts: Vec<usize> = (0..NUM_DAYS)
        .filter_map(|day| {
            timetable
                .grid(day)
                .iter()
                .position(|marker| !matches!(marker, Marker::Open | Marker::Busy))
        })
        .collect();
    if starts.is_empty() {
        return 0.0;
    }
    let avg_start = starts.iter().sum::<usize>() as f64 / starts.len() as f64;
    18.0 - avg_start
}

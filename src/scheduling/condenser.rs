//! Near-duplicate clustering over a list of schedules (spec §4.7).

use super::schedule::Schedule;
use super::timetable::NUM_DAYS;

/// Two schedules are clustered together once their similarity reaches this.
/// Default is exact equality; a tuning parameter per spec §4.7.
pub const SIMILARITY_THRESHOLD: f64 = 1.00;

/// Clusters near-duplicate schedules: sorts ascending by `(overall_score,
/// bitmap_tuple)`, then walks a lag/lead pair merging anything similar enough
/// into the lag schedule's `more_like_this`, dropping the lead (spec §4.7).
///
/// `identify` produces the opaque identifier recorded in `more_like_this`;
/// the core doesn't interpret it (spec §4.7), so it's supplied by the caller.
/// Uses the default [`SIMILARITY_THRESHOLD`]; see [`condense_with_threshold`]
/// to tune it (spec §4.7: "a tuning parameter").
pub fn condense(schedules: Vec<Schedule>, identify: impl Fn(&Schedule) -> String) -> Vec<Schedule> {
    condense_with_threshold(schedules, SIMILARITY_THRESHOLD, identify)
}

/// Like [`condense`], but with a caller-supplied similarity threshold.
pub fn condense_with_threshold(
    mut schedules: Vec<Schedule>,
    threshold: f64,
    identify: impl Fn(&Schedule) -> String,
) -> Vec<Schedule> {
    schedules.sort_by(|a, b| {
        a.overall_score()
            .total_cmp(&b.overall_score())
            .then_with(|| a.timetable().bitmaps().cmp(&b.timetable().bitmaps()))
    });

    let mut removed = vec![false; schedules.len()];
    let mut lag = 0usize;
    let mut lead = 1usize;
    while lead < schedules.len() {
        if is_similar_at(&schedules[lag], &schedules[lead], threshold) {
            let identifier = identify(&schedules[lead]);
            schedules[lag].push_more_like_this(identifier);
            removed[lead] = true;
        } else {
            lag = lead;
        }
        lead += 1;
    }

    schedules
        .into_iter()
        .zip(removed)
        .filter_map(|(schedule, was_removed)| (!was_removed).then_some(schedule))
        .collect()
}

/// `true` iff `similarity(a, b) >= SIMILARITY_THRESHOLD` (spec §4.7).
pub fn is_similar(a: &Schedule, b: &Schedule) -> bool {
    is_similar_at(a, b, SIMILARITY_THRESHOLD)
}

/// `true` iff `similarity(a, b) >= threshold`.
pub fn is_similar_at(a: &Schedule, b: &Schedule, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}

/// `1 - difference(a, b)` (spec §4.7).
pub fn similarity(a: &Schedule, b: &Schedule) -> f64 {
    1.0 - difference(a, b)
}

/// The fraction of `a`'s scheduled blocks that differ from `b`'s, by XOR
/// popcount per day divided by 2 (a moved block flips one bit off and one on)
/// and normalized by `a`'s own total scheduled blocks. When `a` has no
/// scheduled blocks at all, falls back to `b`'s total scheduled blocks
/// (spec §4.7).
fn difference(a: &Schedule, b: &Schedule) -> f64 {
    let a_bitmaps = a.timetable().bitmaps();
    let b_bitmaps = b.timetable().bitmaps();

    let total_self: u32 = a_bitmaps.iter().map(|bitmap| bitmap.count_ones()).sum();
    let total_other: u32 = b_bitmaps.iter().map(|bitmap| bitmap.count_ones()).sum();

    let day_differences: u32 = (0..NUM_DAYS)
        .map(|day| (a_bitmaps[day] ^ b_bitmaps[day]).count_ones() / 2)
        .sum();

    if total_self == 0 {
        return total_other as f64;
    }
    day_differences as f64 / total_self as f64
}

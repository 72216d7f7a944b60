//! Ranking of resolved routes.
//!
//! Pass 1 orders by ascending duration. If that pass reveals any exact
//! duration tie, the entire sequence is re-sorted by ascending distance
//! alone; the duration ordering is discarded, not refined. Existing
//! consumers depend on this coarse behavior, so it must not be replaced
//! with a compound duration-then-distance comparator.

use crate::routes::types::RouteTiming;

/// Sort `routes` in place by the duration-then-distance policy.
pub fn rank(routes: &mut [RouteTiming]) {
    routes.sort_by(|a, b| a.duration.total_cmp(&b.duration));

    // Equal durations are adjacent after the sort, so scanning windows
    // detects every tie.
    let has_tie = routes
        .windows(2)
        .any(|pair| pair[0].duration == pair[1].duration);

    if has_tie {
        routes.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
}

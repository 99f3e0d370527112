//! Standings recomputation: participant totals and 1-based rank assignment.

use crate::model::{Golfer, Participant};
use std::collections::BTreeMap;

/// Recompute every participant's `total_score` and `rank` in one atomic pass.
///
/// Totals sum the owned golfers' effective (post-penalty) scores; a golfer
/// with no recorded score contributes 0 by construction. Ranks are assigned
/// ascending by total (lowest wins), 1-based with no gaps. The sort is stable
/// with no secondary key, so equal totals keep insertion-id order and receive
/// consecutive ranks.
///
/// Invoked exactly once per mutating event (refresh, participant creation);
/// read paths never re-derive ranks on their own.
pub fn recalculate(participants: &mut BTreeMap<i64, Participant>, golfers: &BTreeMap<i64, Golfer>) {
    for (id, participant) in participants.iter_mut() {
        participant.total_score = golfers
            .values()
            .filter(|g| g.participant_id == *id)
            .map(|g| g.score_to_par)
            .sum();
    }

    // BTreeMap iteration is id-ordered, so the stable sort ties off by id.
    let mut ordered: Vec<(i64, i32)> = participants
        .values()
        .map(|p| (p.id, p.total_score))
        .collect();
    ordered.sort_by_key(|(_, total)| *total);

    for (position, (id, _)) in ordered.iter().enumerate() {
        if let Some(participant) = participants.get_mut(id) {
            participant.rank = Some(position as i64 + 1);
        }
    }
}

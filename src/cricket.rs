//! Cricket mark and point accounting.
//!
//! Darts in a turn are applied in order, so one turn can close a number and
//! then score on it. Other players' marks are read from the state before the
//! turn; they cannot change while the current player is throwing.

use tracing::{instrument, trace};

use crate::model::{CricketMarks, DartThrow, Player, BULL, CRICKET_CLOSED};

#[inline] pub fn hits(dart: &DartThrow) -> u8 { dart.multiplier().factor() as u8 }

#[inline] pub fn point_value(segment: u8) -> u32 { if segment == BULL { 25 } else { segment as u32 } }

/// True iff every player other than `player_idx` has closed `segment`.
/// Vacuously true when there are no other players.
pub fn closed_by_all_others(players: &[Player], player_idx: usize, segment: u8) -> bool {
    players
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != player_idx)
        .all(|(_, p)| p.cricket_marks.map_or(false, |m| m.is_closed(segment)))
}

/// Applies one dart to `marks`, returning the new marks and points scored.
pub fn apply_dart(marks: CricketMarks, dart: &DartThrow, closed_by_others: bool) -> (CricketMarks, u32) {
    let segment = dart.segment();
    let Some(current) = marks.get(segment) else {
        return (marks, 0);
    };
    let hits = hits(dart);
    let scoring_hits = if current >= CRICKET_CLOSED {
        hits
    } else {
        (current + hits).saturating_sub(CRICKET_CLOSED)
    };
    let points = if closed_by_others { 0 } else { scoring_hits as u32 * point_value(segment) };
    (marks.with(segment, current + hits), points)
}

#[instrument(level = "debug", skip(players, darts), fields(darts = darts.len()))]
pub fn apply_turn(players: &[Player], player_idx: usize, darts: &[DartThrow]) -> (CricketMarks, u32) {
    let start = players
        .get(player_idx)
        .and_then(|p| p.cricket_marks)
        .unwrap_or_default();
    darts.iter().fold((start, 0), |(marks, total), dart| {
        let dead = marks.get(dart.segment()).is_some()
            && closed_by_all_others(players, player_idx, dart.segment());
        let (marks, points) = apply_dart(marks, dart, dead);
        trace!(dart = %dart, points, "cricket dart applied");
        (marks, total + points)
    })
}

fn has_won(players: &[Player], idx: usize) -> bool {
    let p = &players[idx];
    p.cricket_marks.map_or(false, |m| m.all_closed())
        && players.iter().all(|other| p.score >= other.score)
}

/// Index of the winning player after `current_idx` has thrown. Only the
/// player who just threw can newly qualify; a tied closer wins immediately.
pub fn winner(players: &[Player], current_idx: usize) -> Option<usize> {
    (current_idx < players.len() && has_won(players, current_idx)).then_some(current_idx)
}

//! Countdown (301/501/701/custom) turn evaluation.
//!
//! A turn is judged against the player's remaining score. The out-rule
//! decides which final dart may reach zero; the in-rule decides which darts
//! count before the player has opened.

use tracing::instrument;

use crate::model::{DartThrow, InRule, OutRule, X01Rules};

/// Result of judging one submitted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct X01Outcome {
    /// Points that count toward the countdown after the in-rule is applied.
    pub counted: u32,
    pub is_bust: bool,
    pub is_win: bool,
}

impl X01Outcome {
    /// Remaining score once the outcome is committed.
    pub fn apply(&self, remaining: u32) -> u32 {
        if self.is_bust { remaining } else { remaining - self.counted }
    }
}

pub fn check_bust(remaining: u32, turn_score: u32, last: &DartThrow, out: OutRule) -> bool {
    let left = remaining as i64 - turn_score as i64;
    left < 0
        || (left == 1 && !out.allows_one_remaining())
        || (left == 0 && !out.finishes_with(last))
}

pub fn check_win(remaining: u32, turn_score: u32, last: &DartThrow, out: OutRule) -> bool {
    remaining == turn_score && out.finishes_with(last)
}

/// Points the turn contributes. Before opening, darts ahead of the first
/// qualifying dart count for nothing.
pub fn counted_score(darts: &[DartThrow], opened: bool, in_rule: InRule) -> u32 {
    if opened {
        return darts.iter().map(|d| d.score()).sum();
    }
    darts
        .iter()
        .skip_while(|d| !in_rule.opens_with(d))
        .map(|d| d.score())
        .sum()
}

/// A player has opened once their score has moved off the starting score.
pub fn has_opened(remaining: u32, starting_score: u32, in_rule: InRule) -> bool {
    in_rule == InRule::Straight || remaining < starting_score
}

#[instrument(level = "debug", skip(darts), fields(darts = darts.len()))]
pub fn evaluate_turn(remaining: u32, opened: bool, darts: &[DartThrow], rules: X01Rules) -> X01Outcome {
    let Some(last) = darts.last() else {
        return X01Outcome::default();
    };
    let counted = counted_score(darts, opened, rules.in_rule);
    let is_bust = check_bust(remaining, counted, last, rules.out_rule);
    let is_win = !is_bust && check_win(remaining, counted, last, rules.out_rule);
    X01Outcome { counted, is_bust, is_win }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn darts(labels: &[&str]) -> Vec<DartThrow> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    fn baseline(remaining: u32, labels: &[&str]) -> X01Outcome {
        evaluate_turn(remaining, true, &darts(labels), X01Rules::default())
    }

    #[test]
    fn test_regular_turn_counts_down() {
        let out = baseline(501, &["T20", "T20", "T20"]);
        assert_eq!(out, X01Outcome { counted: 180, is_bust: false, is_win: false });
        assert_eq!(out.apply(501), 321);
    }

    #[test]
    fn test_overshoot_is_bust() {
        let out = baseline(40, &["T20"]);
        assert!(out.is_bust);
        assert_eq!(out.apply(40), 40);
    }

    #[test]
    fn test_leaving_one_is_bust_under_double_out() {
        assert!(baseline(41, &["D20"]).is_bust);
    }

    #[test]
    fn test_zero_without_double_is_bust() {
        assert!(baseline(40, &["20", "20"]).is_bust);
        assert!(baseline(50, &["25", "25"]).is_bust);
    }

    #[test]
    fn test_double_finish_wins() {
        let out = baseline(40, &["D20"]);
        assert!(out.is_win && !out.is_bust);
        assert_eq!(out.apply(40), 0);
        assert!(baseline(2, &["Miss", "D1"]).is_win);
        assert!(baseline(50, &["Bull"]).is_win);
    }

    #[test]
    fn test_straight_out() {
        let rules = X01Rules { out_rule: OutRule::Straight, ..X01Rules::default() };
        assert!(evaluate_turn(20, true, &darts(&["20"]), rules).is_win);
        assert!(!evaluate_turn(21, true, &darts(&["20"]), rules).is_bust);
        assert!(evaluate_turn(19, true, &darts(&["20"]), rules).is_bust);
    }

    #[test]
    fn test_master_out_accepts_triple() {
        let rules = X01Rules { out_rule: OutRule::Master, ..X01Rules::default() };
        assert!(evaluate_turn(60, true, &darts(&["T20"]), rules).is_win);
        assert!(evaluate_turn(20, true, &darts(&["20"]), rules).is_bust);
    }

    #[test]
    fn test_double_in_ignores_darts_before_opening() {
        let rules = X01Rules { in_rule: InRule::Double, ..X01Rules::default() };
        let out = evaluate_turn(501, false, &darts(&["T20", "D10", "5"]), rules);
        assert_eq!(out.counted, 25);
        let out = evaluate_turn(501, false, &darts(&["T20", "T20"]), rules);
        assert_eq!(out.counted, 0);
        assert!(!out.is_bust);
        let out = evaluate_turn(400, true, &darts(&["T20", "T20"]), rules);
        assert_eq!(out.counted, 120);
    }

    #[test]
    fn test_has_opened() {
        assert!(has_opened(501, 501, InRule::Straight));
        assert!(!has_opened(501, 501, InRule::Double));
        assert!(has_opened(480, 501, InRule::Master));
    }

    #[test]
    fn test_empty_turn_is_neutral() {
        assert_eq!(evaluate_turn(100, true, &[], X01Rules::default()), X01Outcome::default());
    }
}

//! Property-based tests for scoring and the turn reducer.

use proptest::prelude::*;

use dart_engine::model::{Action, CricketMarks, DartThrow, GameMode, Multiplier, CRICKET_NUMBERS};
use dart_engine::rules::score_of;
use dart_engine::{cricket, reduce, Game};

fn multiplier_strategy() -> impl Strategy<Value = Multiplier> {
    prop_oneof![Just(Multiplier::Single), Just(Multiplier::Double), Just(Multiplier::Triple)]
}

/// Any legal dart, bull and miss included.
fn dart_strategy() -> impl Strategy<Value = DartThrow> {
    (prop_oneof![0..=20u8, Just(25u8)], multiplier_strategy())
        .prop_map(|(s, m)| DartThrow::new(s, m).unwrap())
}

fn turn_strategy() -> impl Strategy<Value = Vec<DartThrow>> {
    prop::collection::vec(dart_strategy(), 1..=3)
}

fn x01_game(starting_score: u32) -> Game {
    let mut game = Game::new(11);
    game.dispatch(Action::new_game(GameMode::Custom, &["P1", "P2"], Some(starting_score)));
    game
}

fn submit(game: &mut Game, darts: &[DartThrow]) {
    for d in darts {
        game.add_dart(*d);
    }
    game.submit_turn();
}

proptest! {
    // 1. Numbered segments score segment × factor
    #[test]
    fn numbered_score_is_segment_times_factor(s in 1..=20u8, m in multiplier_strategy()) {
        prop_assert_eq!(score_of(s, m), s as u32 * m.factor());
        prop_assert_eq!(DartThrow::new(s, m).unwrap().score(), s as u32 * m.factor());
    }

    // 2. Miss is always 0
    #[test]
    fn miss_scores_zero(m in multiplier_strategy()) {
        prop_assert_eq!(score_of(0, m), 0);
    }

    // 3. remove_last_dart undoes add_dart
    #[test]
    fn remove_restores_pending(pending in prop::collection::vec(dart_strategy(), 0..3), d in dart_strategy()) {
        let mut game = x01_game(501);
        for p in &pending {
            game.add_dart(*p);
        }
        let before = game.state().clone();
        let after = reduce(&reduce(&before, Action::add_dart(d)), Action::RemoveLastDart);
        prop_assert_eq!(after, before);
    }

    // 4. Pending darts never exceed three
    #[test]
    fn pending_capped_at_three(darts in prop::collection::vec(dart_strategy(), 0..8)) {
        let mut game = x01_game(501);
        for d in darts {
            game.add_dart(d);
        }
        prop_assert!(game.state().current_turn.len() <= 3);
    }

    // 5. Overshooting or leaving 1 busts without touching the score
    #[test]
    fn bust_leaves_score(remaining in 2..=180u32, darts in turn_strategy()) {
        let total: u32 = darts.iter().map(|d| d.score()).sum();
        prop_assume!(total > remaining || remaining - total == 1);
        let mut game = x01_game(remaining);
        submit(&mut game, &darts);
        let p1 = &game.state().players[0];
        prop_assert_eq!(p1.score, remaining);
        prop_assert!(p1.turns[0].is_bust);
        prop_assert!(!game.state().is_game_over);
    }

    // 6. X01 score never goes negative and undo refunds exactly
    #[test]
    fn undo_restores_x01_score(remaining in 2..=501u32, darts in turn_strategy()) {
        let mut game = x01_game(remaining);
        submit(&mut game, &darts);
        let p1 = &game.state().players[0];
        let turn = &p1.turns[0];
        let expected = if turn.is_bust { remaining } else { remaining - turn.total_score };
        prop_assert_eq!(p1.score, expected);
        game.undo_turn();
        prop_assert_eq!(game.state().players[0].score, remaining);
        prop_assert!(game.state().players[0].turns.is_empty());
        prop_assert!(!game.state().is_game_over);
    }

    // 7. Cricket marks stay within 0..=3 and never decrease within a turn
    #[test]
    fn cricket_marks_capped(turns in prop::collection::vec(turn_strategy(), 1..12)) {
        let mut game = Game::new(3);
        game.dispatch(Action::new_game(GameMode::Cricket, &["A", "B"], None));
        for t in &turns {
            let idx = game.state().current_player_index;
            let before = game.state().players[idx].cricket_marks.unwrap();
            submit(&mut game, t);
            let after = game.state().players[idx].cricket_marks.unwrap();
            for n in CRICKET_NUMBERS {
                prop_assert!(after.get(n).unwrap() <= 3);
                prop_assert!(after.get(n) >= before.get(n));
            }
        }
    }

    // 8. A single dart never scores more than its own value
    #[test]
    fn cricket_points_bounded_by_dart(d in dart_strategy(), start in 0..=3u8, dead in any::<bool>()) {
        let segment = d.segment();
        let (_, points) = cricket::apply_dart(CricketMarks::new().with(segment, start), &d, dead);
        prop_assert!(points <= d.score());
        if dead {
            prop_assert_eq!(points, 0);
        }
    }
}

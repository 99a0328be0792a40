pub mod checkout;
pub mod config;
pub mod cricket;
pub mod model;
pub mod rng;
pub mod rules;
pub mod x01;

use model::*;
use rules::turn_score;
use tracing::{debug, info};

pub use config::{ConfigError, GameConfig, GameSettings};
pub use rules::DartError;

pub fn create_initial_player(id: PlayerId, name: impl Into<String>, mode: GameMode, starting_score: u32) -> Player {
    let cricket = mode.variant() == Variant::Cricket;
    Player {
        id,
        name: name.into(),
        score: if cricket { 0 } else { starting_score },
        cricket_marks: cricket.then(CricketMarks::new),
        turns: vec![],
    }
}

/// Records `darts` as a completed turn of `player`, snapshotting the
/// player's pre-turn score and marks.
pub fn create_turn(player: &Player, darts: &[DartThrow], is_bust: bool, points: u32) -> Turn {
    Turn {
        player_id: player.id.clone(),
        darts: darts.to_vec(),
        total_score: turn_score(darts),
        is_bust,
        points,
        before: player.snapshot(),
    }
}

#[inline] pub fn next_player_index(current: usize, total: usize) -> usize { (current + 1) % total }
#[inline] pub fn previous_player_index(current: usize, total: usize) -> usize { (current + total - 1) % total }

/// Applies `action` to `state` and returns the next state. Actions that are
/// not legal in `state` return an unchanged copy.
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::AddDart { dart } => add_dart(state, dart),
        Action::RemoveLastDart => remove_last_dart(state),
        Action::SubmitTurn => submit_turn(state),
        Action::UndoTurn => undo_turn(state),
        Action::NewGame { mode, players, starting_score, rules } => {
            new_game(state, mode, players, starting_score, rules)
        }
        Action::ResetGame => reset_game(state),
    }
}

fn add_dart(state: &GameState, dart: DartThrow) -> GameState {
    if state.is_game_over || state.players.is_empty() {
        debug!(%dart, "add_dart ignored: no game in progress");
        return state.clone();
    }
    if state.current_turn.len() >= MAX_DARTS_PER_TURN {
        debug!(%dart, max = MAX_DARTS_PER_TURN, "add_dart ignored: turn is full");
        return state.clone();
    }
    let mut next = state.clone();
    next.current_turn.push(dart);
    next
}

fn remove_last_dart(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.current_turn.pop().is_none() {
        debug!("remove_last_dart ignored: no pending darts");
    }
    next
}

fn submit_turn(state: &GameState) -> GameState {
    if state.current_turn.is_empty() || state.is_game_over {
        debug!(pending = state.current_turn.len(), over = state.is_game_over, "submit_turn ignored");
        return state.clone();
    }
    let idx = state.current_player_index;
    let Some(player) = state.players.get(idx) else {
        debug!(idx, "submit_turn ignored: no current player");
        return state.clone();
    };
    let darts = &state.current_turn;
    let mut next = state.clone();

    let winner = match state.variant() {
        Variant::X01 => {
            let opened = x01::has_opened(player.score, state.starting_score, state.rules.in_rule);
            let outcome = x01::evaluate_turn(player.score, opened, darts, state.rules);
            if outcome.is_bust {
                info!(player = %player.name, remaining = player.score, thrown = turn_score(darts), "bust");
            }
            let points = if outcome.is_bust { 0 } else { outcome.counted };
            let turn = create_turn(player, darts, outcome.is_bust, points);
            let p = &mut next.players[idx];
            p.score = outcome.apply(player.score);
            p.turns.push(turn);
            outcome.is_win.then_some(idx)
        }
        Variant::Cricket => {
            let (marks, points) = cricket::apply_turn(&state.players, idx, darts);
            let turn = create_turn(player, darts, false, points);
            let p = &mut next.players[idx];
            p.score += points;
            p.cricket_marks = Some(marks);
            p.turns.push(turn);
            cricket::winner(&next.players, idx)
        }
    };

    next.current_turn.clear();
    match winner {
        Some(w) => {
            let champ = &next.players[w];
            info!(winner = %champ.name, id = %champ.id, "game over");
            next.winner_id = Some(champ.id.clone());
            next.is_game_over = true;
        }
        None => next.current_player_index = next_player_index(idx, next.players.len()),
    }
    next
}

fn undo_turn(state: &GameState) -> GameState {
    if !state.current_turn.is_empty() {
        let mut next = state.clone();
        next.current_turn.clear();
        return next;
    }
    if state.players.is_empty() {
        return state.clone();
    }
    // After a win the index stays on the winner, whose turn was the last one.
    let owner = if state.is_game_over {
        state.current_player_index
    } else {
        previous_player_index(state.current_player_index, state.players.len())
    };
    let mut next = state.clone();
    let p = &mut next.players[owner];
    let Some(turn) = p.turns.pop() else {
        debug!(player = %p.name, "undo_turn ignored: nothing to undo");
        return state.clone();
    };
    p.score = turn.before.score;
    p.cricket_marks = turn.before.cricket_marks;
    info!(player = %p.name, restored = p.score, was_bust = turn.is_bust, "turn undone");
    next.current_player_index = owner;
    next.is_game_over = false;
    next.winner_id = None;
    next
}

fn new_game(
    state: &GameState,
    mode: GameMode,
    names: Vec<String>,
    starting_score: Option<u32>,
    rules: X01Rules,
) -> GameState {
    let starting_score = mode.starting_score(starting_score);
    let games_started = state.games_started + 1;
    let mut id_rng = rng::roster_rng(state.seed, games_started);
    let ids = rng::player_ids(&mut id_rng, names.len());
    info!(?mode, starting_score, players = names.len(), "new game");
    let players = ids
        .into_iter()
        .zip(names)
        .map(|(id, name)| create_initial_player(id, name, mode, starting_score))
        .collect();
    GameState {
        mode,
        starting_score,
        rules,
        players,
        current_player_index: 0,
        current_turn: vec![],
        is_game_over: false,
        winner_id: None,
        seed: state.seed,
        games_started,
    }
}

fn reset_game(state: &GameState) -> GameState {
    info!(mode = ?state.mode, players = state.players.len(), "game reset");
    let players = state
        .players
        .iter()
        .map(|p| create_initial_player(p.id.clone(), p.name.clone(), state.mode, state.starting_score))
        .collect();
    GameState {
        players,
        current_player_index: 0,
        current_turn: vec![],
        is_game_over: false,
        winner_id: None,
        ..state.clone()
    }
}

/// Owns the live [`GameState`] of one session.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game { state: GameState::with_seed(seed) }
    }

    /// Starts a game from a setup-screen config, rejecting malformed ones.
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Game::new(config.settings.seed);
        game.dispatch(config.into_action());
        Ok(game)
    }

    pub fn state(&self) -> &GameState { &self.state }

    pub fn dispatch(&mut self, action: Action) -> &GameState {
        self.state = reduce(&self.state, action);
        &self.state
    }

    pub fn add_dart(&mut self, dart: DartThrow) -> &GameState { self.dispatch(Action::add_dart(dart)) }
    pub fn remove_last_dart(&mut self) -> &GameState { self.dispatch(Action::RemoveLastDart) }
    pub fn submit_turn(&mut self) -> &GameState { self.dispatch(Action::SubmitTurn) }
    pub fn undo_turn(&mut self) -> &GameState { self.dispatch(Action::UndoTurn) }
    pub fn reset(&mut self) -> &GameState { self.dispatch(Action::ResetGame) }

    /// Advisory checkout for the current X01 player, counting darts already
    /// pending in this visit. The chart only knows double-out finishes, so
    /// there is no hint under other out-rules or before the player has opened.
    pub fn checkout_hint(&self) -> Option<checkout::CheckoutHint> {
        let s = &self.state;
        if s.variant() != Variant::X01 || s.is_game_over || s.rules.out_rule != OutRule::Double {
            return None;
        }
        let player = s.current_player()?;
        if !x01::has_opened(player.score, s.starting_score, s.rules.in_rule) {
            return None;
        }
        let remaining = player.score.checked_sub(s.pending_score())?;
        Some(checkout::hint(remaining, s.darts_left()))
    }
}

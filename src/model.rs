use serde::{Deserialize, Serialize};

use crate::rules;

pub type PlayerId = String;

pub const MAX_DARTS_PER_TURN: usize = 3;
pub const BULL: u8 = 25;
pub const MISS: u8 = 0;
pub const CRICKET_NUMBERS: [u8; 7] = [15, 16, 17, 18, 19, 20, 25];
pub const CRICKET_CLOSED: u8 = 3;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Multiplier { Single, Double, Triple }

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self { Multiplier::Single => 1, Multiplier::Double => 2, Multiplier::Triple => 3 }
    }
}

/// One dart's outcome. Only constructible through [`DartThrow::new`] (or
/// label parsing), so `score` always agrees with `segment` and `multiplier`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RawDart")]
pub struct DartThrow {
    segment: u8,
    multiplier: Multiplier,
    score: u32,
}

#[derive(Deserialize)]
struct RawDart { segment: u8, multiplier: Multiplier }

impl TryFrom<RawDart> for DartThrow {
    type Error = rules::DartError;
    fn try_from(raw: RawDart) -> Result<Self, Self::Error> {
        DartThrow::new(raw.segment, raw.multiplier)
    }
}

impl DartThrow {
    /// Bull triple is normalized to a double bull, a miss to a single.
    pub fn new(segment: u8, multiplier: Multiplier) -> Result<Self, rules::DartError> {
        let multiplier = match (segment, multiplier) {
            (MISS, _) => Multiplier::Single,
            (BULL, Multiplier::Triple) => Multiplier::Double,
            (1..=20, m) | (BULL, m) => m,
            (s, _) => return Err(rules::DartError::InvalidSegment(s)),
        };
        Ok(Self { segment, multiplier, score: rules::score_of(segment, multiplier) })
    }

    pub fn miss() -> Self {
        Self { segment: MISS, multiplier: Multiplier::Single, score: 0 }
    }

    pub fn segment(&self) -> u8 { self.segment }
    pub fn multiplier(&self) -> Multiplier { self.multiplier }
    pub fn score(&self) -> u32 { self.score }
    pub fn is_double(&self) -> bool { self.multiplier == Multiplier::Double }
    pub fn is_miss(&self) -> bool { self.segment == MISS }
}

/// Per-player mark counts on 15..=20 and bull, each capped at 3.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CricketMarks {
    marks: [u8; 7],
}

impl CricketMarks {
    pub fn new() -> Self { Self::default() }

    fn slot(segment: u8) -> Option<usize> {
        CRICKET_NUMBERS.iter().position(|&n| n == segment)
    }

    /// `None` for segments that are not cricket numbers.
    pub fn get(&self, segment: u8) -> Option<u8> {
        Self::slot(segment).map(|i| self.marks[i])
    }

    pub fn with(mut self, segment: u8, count: u8) -> Self {
        if let Some(i) = Self::slot(segment) {
            self.marks[i] = count.min(CRICKET_CLOSED);
        }
        self
    }

    pub fn is_closed(&self, segment: u8) -> bool {
        self.get(segment).map_or(false, |m| m >= CRICKET_CLOSED)
    }

    pub fn all_closed(&self) -> bool {
        self.marks.iter().all(|&m| m >= CRICKET_CLOSED)
    }
}

/// Player state captured before a turn was applied; undo restores it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub score: u32,
    pub cricket_marks: Option<CricketMarks>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub player_id: PlayerId,
    pub darts: Vec<DartThrow>,
    pub total_score: u32,
    pub is_bust: bool,
    /// Points the turn actually applied: counted score for X01 (0 on bust),
    /// points scored for Cricket.
    pub points: u32,
    pub before: TurnSnapshot,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32, // remaining for X01, points for cricket
    pub cricket_marks: Option<CricketMarks>,
    pub turns: Vec<Turn>,
}

impl Player {
    pub fn last_turn(&self) -> Option<&Turn> { self.turns.last() }

    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot { score: self.score, cricket_marks: self.cricket_marks }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[serde(rename = "301")] X301,
    #[serde(rename = "501")] X501,
    #[serde(rename = "701")] X701,
    #[serde(rename = "custom")] Custom,
    #[serde(rename = "cricket")] Cricket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant { X01, Cricket }

impl GameMode {
    pub fn variant(self) -> Variant {
        match self { GameMode::Cricket => Variant::Cricket, _ => Variant::X01 }
    }

    pub fn default_starting_score(self) -> u32 {
        match self {
            GameMode::X301 => 301,
            GameMode::X501 | GameMode::Custom => 501,
            GameMode::X701 => 701,
            GameMode::Cricket => 0,
        }
    }

    /// Cricket always starts from 0 points regardless of `requested`.
    pub fn starting_score(self, requested: Option<u32>) -> u32 {
        match self.variant() {
            Variant::Cricket => 0,
            Variant::X01 => requested.unwrap_or_else(|| self.default_starting_score()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InRule { #[default] Straight, Double, Master }

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutRule { Straight, #[default] Double, Master }

impl InRule {
    pub fn opens_with(self, dart: &DartThrow) -> bool {
        match self {
            InRule::Straight => true,
            InRule::Double => dart.is_double(),
            InRule::Master => dart.multiplier() != Multiplier::Single,
        }
    }
}

impl OutRule {
    pub fn finishes_with(self, dart: &DartThrow) -> bool {
        match self {
            OutRule::Straight => true,
            OutRule::Double => dart.is_double(),
            OutRule::Master => dart.multiplier() != Multiplier::Single,
        }
    }

    /// Whether a remainder of 1 can still be checked out.
    pub fn allows_one_remaining(self) -> bool {
        self == OutRule::Straight
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct X01Rules {
    #[serde(default)]
    pub in_rule: InRule,
    #[serde(default)]
    pub out_rule: OutRule,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub mode: GameMode,
    pub starting_score: u32,
    pub rules: X01Rules,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub current_turn: Vec<DartThrow>,
    pub is_game_over: bool,
    pub winner_id: Option<PlayerId>,
    pub seed: u64,
    pub games_started: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl GameState {
    pub fn with_seed(seed: u64) -> Self {
        GameState {
            mode: GameMode::X501,
            starting_score: 501,
            rules: X01Rules::default(),
            players: vec![],
            current_player_index: 0,
            current_turn: vec![],
            is_game_over: false,
            winner_id: None,
            seed,
            games_started: 0,
        }
    }

    pub fn variant(&self) -> Variant { self.mode.variant() }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn winner(&self) -> Option<&Player> {
        let id = self.winner_id.as_ref()?;
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn darts_left(&self) -> usize {
        MAX_DARTS_PER_TURN.saturating_sub(self.current_turn.len())
    }

    pub fn pending_score(&self) -> u32 {
        rules::turn_score(&self.current_turn)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddDart { dart: DartThrow },
    RemoveLastDart,
    SubmitTurn,
    UndoTurn,
    #[serde(rename_all = "camelCase")]
    NewGame {
        mode: GameMode,
        players: Vec<String>,
        #[serde(default)]
        starting_score: Option<u32>,
        #[serde(default)]
        rules: X01Rules,
    },
    ResetGame,
}

impl Action {
    pub fn add_dart(dart: DartThrow) -> Self { Action::AddDart { dart } }

    /// New game under the baseline straight-in/double-out rules.
    pub fn new_game(mode: GameMode, players: &[&str], starting_score: Option<u32>) -> Self {
        Action::NewGame {
            mode,
            players: players.iter().map(|p| p.to_string()).collect(),
            starting_score,
            rules: X01Rules::default(),
        }
    }
}

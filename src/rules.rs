use std::fmt;
use std::str::FromStr;

use crate::model::{DartThrow, Multiplier, BULL, MISS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DartError {
    #[error("segment {0} is not on the board (expected 0-20 or 25)")]
    InvalidSegment(u8),
    #[error("cannot parse dart label {0:?}")]
    InvalidLabel(String),
}

#[inline] pub fn multiplier_factor(m: Multiplier) -> u32 { m.factor() }

/// Bull scores 25/50 and has no triple; anything passed as a bull triple
/// scores as a double.
pub fn score_of(segment: u8, multiplier: Multiplier) -> u32 {
    match segment {
        MISS => 0,
        BULL => if multiplier == Multiplier::Single { 25 } else { 50 },
        s => s as u32 * multiplier_factor(multiplier),
    }
}

pub fn turn_score(darts: &[DartThrow]) -> u32 {
    darts.iter().map(|d| d.score()).sum()
}

impl fmt::Display for DartThrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.segment(), self.multiplier()) {
            (MISS, _) => write!(f, "Miss"),
            (BULL, Multiplier::Single) => write!(f, "25"),
            (BULL, _) => write!(f, "Bull"),
            (s, Multiplier::Single) => write!(f, "{s}"),
            (s, Multiplier::Double) => write!(f, "D{s}"),
            (s, Multiplier::Triple) => write!(f, "T{s}"),
        }
    }
}

/// Checkout-chart notation: `T20`, `D16`, `7`, `25` (single bull),
/// `Bull`/`DB` (double bull), `Miss`/`0`.
impl FromStr for DartThrow {
    type Err = DartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let bad = || DartError::InvalidLabel(s.to_string());
        match label.to_ascii_uppercase().as_str() {
            "BULL" | "DB" | "D25" => return DartThrow::new(BULL, Multiplier::Double),
            "MISS" | "M" => return Ok(DartThrow::miss()),
            _ => {}
        }
        let (multiplier, digits) = match label.as_bytes().first() {
            Some(b'T') | Some(b't') => (Multiplier::Triple, &label[1..]),
            Some(b'D') | Some(b'd') => (Multiplier::Double, &label[1..]),
            Some(b'S') | Some(b's') => (Multiplier::Single, &label[1..]),
            _ => (Multiplier::Single, label),
        };
        let segment: u8 = digits.parse().map_err(|_| bad())?;
        DartThrow::new(segment, multiplier)
    }
}

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::PlayerId;

pub const PLAYER_ID_LEN: usize = 7;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Rng for the roster of the `game_no`-th game started from `seed`.
pub fn roster_rng(seed: u64, game_no: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ game_no.wrapping_mul(7919) ^ 0xDA27)
}

pub fn player_id(rng: &mut StdRng) -> PlayerId {
    (0..PLAYER_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// `count` distinct ids.
pub fn player_ids(rng: &mut StdRng, count: usize) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = Vec::with_capacity(count);
    while ids.len() < count {
        let id = player_id(rng);
        if !ids.contains(&id) { ids.push(id); }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_base36_and_sized() {
        let mut rng = roster_rng(42, 1);
        let id = player_id(&mut rng);
        assert_eq!(id.len(), PLAYER_ID_LEN);
        assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = player_ids(&mut roster_rng(7, 3), 4);
        let b = player_ids(&mut roster_rng(7, 3), 4);
        assert_eq!(a, b);
        let c = player_ids(&mut roster_rng(7, 4), 4);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids = player_ids(&mut roster_rng(0, 0), 16);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }
}

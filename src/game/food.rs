use super::state::Position;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random draws before falling back to choosing among the free cells.
const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Pick a cell that no snake segment occupies. Returns `None` when the board is full.
///
/// Rejection sampling is cheap while the snake is short. Once it keeps missing,
/// the free cells are enumerated and one is chosen uniformly.
pub fn place_food<R: Rng>(rng: &mut R, tile_count: i16, snake: &[Position]) -> Option<Position> {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let pos = Position::new(rng.gen_range(0..tile_count), rng.gen_range(0..tile_count));
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..tile_count)
        .flat_map(|y| (0..tile_count).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(pos))
        .collect();
    free.choose(rng).copied()
}

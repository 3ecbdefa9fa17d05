//! Random self-play, used by the `demo` command.
//!
//! Each turn the mover either passes (with probability `pass_rate`) or plays a
//! uniformly random empty point. A full board forces a pass.

use tracing::debug;

use crate::constants::MAX_DEMO_MOVES;
use crate::error::Result;
use crate::game::GameSession;

/// Settings for one random game.
#[derive(Clone, Debug)]
pub struct SelfPlay {
    pub max_moves: usize,
    pub pass_rate: f64,
}

impl Default for SelfPlay {
    fn default() -> Self {
        Self {
            max_moves: MAX_DEMO_MOVES,
            pass_rate: 0.1,
        }
    }
}

impl SelfPlay {
    /// Play moves on `game` until it ends or `max_moves` moves were made.
    ///
    /// Returns the number of moves played.
    pub fn play_out(&self, game: &mut GameSession, rng: &mut fastrand::Rng) -> Result<usize> {
        let mut played = 0;
        while !game.is_over() && played < self.max_moves {
            let empty = game.board().empty_points();
            if empty.is_empty() || rng.f64() < self.pass_rate {
                game.pass_turn()?;
            } else {
                let pt = empty[rng.usize(..empty.len())];
                game.place_stone(pt)?;
            }
            played += 1;
        }
        debug!(played, over = game.is_over(), "self-play finished");
        Ok(played)
    }
}

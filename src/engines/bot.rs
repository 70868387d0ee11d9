//! The automated opponent.
//!
//! `ChessBot` always computes moves for Black. It holds nothing but its
//! difficulty; every call takes the game state and a caller-supplied RNG,
//! so tests can seed the randomness and replay a decision exactly.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board::{Board, Square};
use crate::game_state::GameState;
use crate::legal_moves::get_all_valid_moves;
use crate::piece::Color;
use crate::scoring::{evaluate_move, Score};

use super::minimax::search_move;

/// Search depth of the hard difficulty, in plies.
const HARD_SEARCH_DEPTH: u8 = 2;

/// Strength setting, fixed for the bot's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Best-scoring slice of the legal moves, picked at random for variety.
    Medium,
    /// Deterministic two-ply alpha-beta search.
    Hard,
}

impl Difficulty {
    /// Case-insensitive name lookup, for configuration strings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A legal move together with its static per-move evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub from: Square,
    pub to: Square,
    pub score: Score,
}

/// The move the bot wants to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub from: Square,
    pub to: Square,
}

/// The automated opponent for the black side.
#[derive(Debug, Clone, Copy)]
pub struct ChessBot {
    difficulty: Difficulty,
}

impl ChessBot {
    pub fn new(difficulty: Difficulty) -> Self {
        ChessBot { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks Black's next move, or `None` when Black has no legal move
    /// (the game is already decided; callers should not normally ask).
    pub fn get_best_move<R: Rng + ?Sized>(
        &self,
        game: &GameState,
        rng: &mut R,
    ) -> Option<BotMove> {
        let moves = scored_moves(&game.board);
        if moves.is_empty() {
            debug!("bot: no legal moves for black");
            return None;
        }
        debug!(
            "bot: {:?} choosing among {} legal moves",
            self.difficulty,
            moves.len()
        );

        let chosen = match self.difficulty {
            Difficulty::Easy => random_move(&moves, rng),
            Difficulty::Medium => medium_move(moves, rng),
            Difficulty::Hard => hard_move(&game.board, &moves),
        };
        debug!(
            "bot: picked ({},{}) -> ({},{})",
            chosen.from.0, chosen.from.1, chosen.to.0, chosen.to.1
        );
        Some(chosen)
    }
}

/// Every legal black move, flattened from the per-piece grouping and scored
/// with the static per-move evaluation. Order follows the row-major board
/// scan and each piece's generation order, which is what makes the hard
/// difficulty's tie-breaking reproducible.
fn scored_moves(board: &Board) -> Vec<ScoredMove> {
    get_all_valid_moves(board, Color::Black)
        .into_iter()
        .flat_map(|piece_moves| {
            let from = piece_moves.square;
            piece_moves.moves.into_iter().map(move |to| ScoredMove {
                from,
                to,
                score: evaluate_move(board, &from, &to),
            })
        })
        .collect()
}

fn random_move<R: Rng + ?Sized>(moves: &[ScoredMove], rng: &mut R) -> BotMove {
    // Non-empty by the caller's check, so choose cannot fail.
    let picked = moves.choose(rng).unwrap();
    BotMove {
        from: picked.from,
        to: picked.to,
    }
}

/// Sorts by score descending and picks at random among the top 30%
/// (rounded up, at least one): bounded rationality with some variety.
fn medium_move<R: Rng + ?Sized>(mut moves: Vec<ScoredMove>, rng: &mut R) -> BotMove {
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    let keep = (moves.len() * 3).div_ceil(10).max(1);
    let picked = moves[..keep].choose(rng).unwrap();
    BotMove {
        from: picked.from,
        to: picked.to,
    }
}

/// Runs the two-ply alpha-beta search on every candidate and keeps the
/// first move with the maximal score. No randomness on this path.
fn hard_move(board: &Board, moves: &[ScoredMove]) -> BotMove {
    let mut best = moves[0];
    let mut best_score = Score::MIN;

    for candidate in moves {
        let score = search_move(
            board,
            candidate.from,
            candidate.to,
            HARD_SEARCH_DEPTH,
            false,
            Score::MIN,
            Score::MAX,
        );
        if score > best_score {
            best_score = score;
            best = *candidate;
        }
    }
    debug!("bot: hard search best score {best_score}");

    BotMove {
        from: best.from,
        to: best.to,
    }
}

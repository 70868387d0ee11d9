//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The search is always oriented the same way: Black is the maximizing
//! side and White the minimizing side, matching the sign convention of
//! `scoring::evaluate_position`. Every node simulates its pending move on a
//! cloned board, so the caller's board is never touched.

use crate::board::{Board, Square};
use crate::legal_moves::get_all_valid_moves;
use crate::piece::Color;
use crate::scoring::{evaluate_position, Score};

/// Evaluates the candidate move `from -> to` on `board` by looking `depth`
/// plies ahead.
///
/// At depth 0 the pending move is ignored and the current board's static
/// evaluation is returned. Otherwise the move is applied to a clone and the
/// replying side's legal moves are searched, maximizing for Black and
/// minimizing for White, with alpha/beta updated down the tree and the
/// usual cutoff.
///
/// A node whose replying side has no legal moves returns the static
/// evaluation of the post-move board directly. Without that base case the
/// min/max over an empty list would propagate the `±infinity` sentinel
/// upward and poison the root comparison.
///
/// # Arguments
/// * `board` - Position before the candidate move.
/// * `from`, `to` - The candidate move to apply.
/// * `depth` - Remaining plies to search below this node.
/// * `maximizing` - True when the reply belongs to Black.
/// * `alpha`, `beta` - Current search window.
pub fn search_move(
    board: &Board,
    from: Square,
    to: Square,
    depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if depth == 0 {
        return evaluate_position(board);
    }

    let next = board.apply_unchecked(from, to);
    let replying = if maximizing {
        Color::Black
    } else {
        Color::White
    };

    let replies = get_all_valid_moves(&next, replying);
    if replies.is_empty() {
        return evaluate_position(&next);
    }

    if maximizing {
        let mut best = Score::MIN;
        'outer: for piece_moves in &replies {
            for reply in &piece_moves.moves {
                let value = search_move(
                    &next,
                    piece_moves.square,
                    *reply,
                    depth - 1,
                    false,
                    alpha,
                    beta,
                );
                if value > best {
                    best = value;
                }
                if value > alpha {
                    alpha = value;
                }
                // Beta cutoff
                if beta <= alpha {
                    break 'outer;
                }
            }
        }
        best
    } else {
        let mut best = Score::MAX;
        'outer: for piece_moves in &replies {
            for reply in &piece_moves.moves {
                let value = search_move(
                    &next,
                    piece_moves.square,
                    *reply,
                    depth - 1,
                    true,
                    alpha,
                    beta,
                );
                if value < best {
                    best = value;
                }
                if value < beta {
                    beta = value;
                }
                // Alpha cutoff
                if beta <= alpha {
                    break 'outer;
                }
            }
        }
        best
    }
}

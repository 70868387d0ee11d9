use crate::board::{move_square, Board, Square};
use crate::piece::Color;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Pseudo-legal rook destinations: slides along the four orthogonals until
/// blocked, including the first enemy-occupied square.
pub fn rook_moves(square: Square, board: &Board, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in ROOK_DIRECTIONS {
        for step in 1..8 {
            let next = match move_square(&square, d_row * step, d_col * step) {
                Ok(next) => next,
                Err(_) => break,
            };
            match board.view(next) {
                None => moves.push(next),
                Some(target) => {
                    if target.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let board = Board::empty();
        assert_eq!(rook_moves((3, 3), &board, Color::White).len(), 14);
    }

    #[test]
    fn rook_stops_on_first_blocker() {
        // White rook a1, white pawn a4, black knight e1.
        let board = Board::from_fen("8/8/8/8/P7/8/8/R3n3").unwrap();
        let moves = rook_moves((7, 0), &board, Color::White);
        // Up the file: a2, a3 only (own pawn blocks). Along the rank:
        // b1..d1 plus the capture on e1.
        assert!(moves.contains(&(6, 0)));
        assert!(moves.contains(&(5, 0)));
        assert!(!moves.contains(&(4, 0)));
        assert!(moves.contains(&(7, 4)));
        assert!(!moves.contains(&(7, 5)));
        assert_eq!(moves.len(), 6);
    }
}

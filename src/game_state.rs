//! Game orchestration: the full game value, move records, and pure
//! move application with status derivation.
//!
//! `GameState` is a value; `apply_move` never mutates the state it was
//! called on, it validates the requested move and returns a fresh state
//! with the move applied, the player flipped, and the status derived for
//! the side now to move.

use crate::board::{is_same_position, Board, Square};
use crate::check::{is_in_check, would_be_in_check};
use crate::chess_errors::ChessErrors;
use crate::legal_moves::{get_all_valid_moves, is_stalemate};
use crate::move_generator::get_possible_moves;
use crate::piece::{Color, Piece};

/// Status of the game, derived after every move for the side to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// Reserved for future draw rules; nothing in this crate produces it.
    Draw,
}

impl GameStatus {
    /// True for statuses that end the game.
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// One played move, immutable once recorded. `piece` is the pre-move piece
/// value (its `has_moved` flag as it was before the move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Pieces captured so far, grouped by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// The complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub game_status: GameStatus,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
}

impl GameState {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::initial(),
            current_player: Color::White,
            game_status: GameStatus::Playing,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        }
    }

    /// Legal destinations for the piece on `square`, or an empty list when
    /// the square is empty or holds the opponent's piece. Convenience for
    /// front-ends highlighting a selected piece.
    pub fn valid_moves_from(&self, square: Square) -> Vec<Square> {
        match self.board.view(square) {
            Some(piece) if piece.color == self.current_player => {
                get_possible_moves(piece, square, &self.board)
                    .into_iter()
                    .filter(|to| {
                        !would_be_in_check(&self.board, square, *to, self.current_player)
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Validates and applies `from -> to` for the current player, returning
    /// the resulting state. The receiver is untouched.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<GameState, ChessErrors> {
        if self.game_status.is_over() {
            return Err(ChessErrors::GameAlreadyOver(self.game_status));
        }
        let piece = self
            .board
            .view(from)
            .ok_or(ChessErrors::NoPieceAtSquare(from))?;
        if piece.color != self.current_player {
            return Err(ChessErrors::WrongSideToMove(from));
        }
        let legal = self
            .valid_moves_from(from)
            .iter()
            .any(|candidate| is_same_position(candidate, &to));
        if !legal {
            return Err(ChessErrors::IllegalMove((from, to)));
        }

        let captured_piece = *self.board.view(to);
        let board = self.board.apply_unchecked(from, to);
        let next_player = self.current_player.opposite();

        let game_status = if is_in_check(&board, next_player) {
            if get_all_valid_moves(&board, next_player).is_empty() {
                GameStatus::Checkmate
            } else {
                GameStatus::Check
            }
        } else if is_stalemate(&board, next_player) {
            GameStatus::Stalemate
        } else {
            GameStatus::Playing
        };

        let record = MoveRecord {
            from,
            to,
            piece,
            captured_piece,
            is_check: game_status == GameStatus::Check,
            is_checkmate: game_status == GameStatus::Checkmate,
        };

        let mut move_history = self.move_history.clone();
        move_history.push(record);
        let mut captured_pieces = self.captured_pieces.clone();
        if let Some(captured) = captured_piece {
            captured_pieces.record(captured);
        }

        Ok(GameState {
            board,
            current_player: next_player,
            game_status,
            move_history,
            captured_pieces,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece::PieceKind;

    #[test]
    fn opening_move_flips_player_and_records_history() {
        let game = GameState::new();
        let game = game.apply_move((6, 4), (4, 4)).unwrap();
        assert_eq!(game.current_player, Color::Black);
        assert_eq!(game.game_status, GameStatus::Playing);
        assert_eq!(game.move_history.len(), 1);
        let record = &game.move_history[0];
        assert_eq!(record.from, (6, 4));
        assert_eq!(record.to, (4, 4));
        assert_eq!(record.piece.kind, PieceKind::Pawn);
        assert!(!record.piece.has_moved);
        assert!(record.captured_piece.is_none());
    }

    #[test]
    fn rejects_wrong_side_empty_square_and_illegal_destination() {
        let game = GameState::new();
        assert!(matches!(
            game.apply_move((1, 0), (2, 0)),
            Err(ChessErrors::WrongSideToMove(_))
        ));
        assert!(matches!(
            game.apply_move((4, 4), (3, 4)),
            Err(ChessErrors::NoPieceAtSquare(_))
        ));
        assert!(matches!(
            game.apply_move((6, 0), (3, 0)),
            Err(ChessErrors::IllegalMove(_))
        ));
    }

    #[test]
    fn captures_land_in_the_captured_bin() {
        let game = GameState::new();
        let game = game.apply_move((6, 4), (4, 4)).unwrap(); // e4
        let game = game.apply_move((1, 3), (3, 3)).unwrap(); // d5
        let game = game.apply_move((4, 4), (3, 3)).unwrap(); // exd5
        assert_eq!(game.captured_pieces.black.len(), 1);
        assert_eq!(game.captured_pieces.black[0].kind, PieceKind::Pawn);
        assert!(game.captured_pieces.white.is_empty());
        assert!(game.move_history[2].captured_piece.is_some());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let game = GameState::new();
        let game = game.apply_move((6, 5), (5, 5)).unwrap(); // f3
        let game = game.apply_move((1, 4), (3, 4)).unwrap(); // e5
        let game = game.apply_move((6, 6), (4, 6)).unwrap(); // g4
        let game = game.apply_move((0, 3), (4, 7)).unwrap(); // Qh4#
        assert_eq!(game.game_status, GameStatus::Checkmate);
        assert!(game.move_history.last().unwrap().is_checkmate);
        assert!(matches!(
            game.apply_move((6, 0), (5, 0)),
            Err(ChessErrors::GameAlreadyOver(GameStatus::Checkmate))
        ));
    }

    #[test]
    fn check_is_reported_but_play_continues() {
        let game = GameState::new();
        let game = game.apply_move((6, 4), (4, 4)).unwrap(); // e4
        let game = game.apply_move((1, 5), (2, 5)).unwrap(); // f6
        let game = game.apply_move((7, 3), (3, 7)).unwrap(); // Qh5+
        assert_eq!(game.game_status, GameStatus::Check);
        assert!(game.move_history.last().unwrap().is_check);
        assert!(!game.game_status.is_over());
    }

    #[test]
    fn valid_moves_from_respects_selection_rules() {
        let game = GameState::new();
        assert!(game.valid_moves_from((4, 4)).is_empty()); // empty square
        assert!(game.valid_moves_from((1, 0)).is_empty()); // opponent piece
        assert_eq!(game.valid_moves_from((6, 0)).len(), 2); // own pawn
    }
}

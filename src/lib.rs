//! Crate root module declarations for the Pixel Chess core.
//!
//! This file exposes the rules engine (board, per-piece move generation,
//! check and verdict detection), the evaluation and search bot, and the
//! game orchestration layer so the terminal binary, tests, and external
//! front-ends can import stable module paths.

pub mod board;
pub mod check;
pub mod chess_errors;
pub mod game_state;
pub mod legal_moves;
pub mod move_generator;
pub mod piece;
pub mod scoring;

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod engines {
    pub mod bot;
    pub mod minimax;
}

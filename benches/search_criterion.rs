use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixel_chess::board::Board;
use pixel_chess::engines::bot::{ChessBot, Difficulty};
use pixel_chess::game_state::{GameState, GameStatus};
use pixel_chess::legal_moves::get_all_valid_moves;
use pixel_chess::piece::Color;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    // Legal black moves, asserted before benchmarking.
    expected_black_moves: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_black_moves: 20,
    },
    BenchCase {
        name: "open_middlegame",
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        expected_black_moves: 29,
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_black_moves: 15,
    },
];

fn game_for(case: &BenchCase) -> GameState {
    GameState {
        board: Board::from_fen(case.fen).expect("benchmark FEN should parse"),
        current_player: Color::Black,
        game_status: GameStatus::Playing,
        move_history: Vec::new(),
        captured_pieces: Default::default(),
    }
}

fn flat_count(board: &Board, color: Color) -> usize {
    get_all_valid_moves(board, color)
        .iter()
        .map(|pm| pm.moves.len())
        .sum()
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in CASES {
        let game = game_for(case);

        // Correctness guard before benchmarking.
        let count = flat_count(&game.board, Color::Black);
        assert_eq!(
            count, case.expected_black_moves,
            "move count mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, _| {
            b.iter(|| flat_count(black_box(&game.board), black_box(Color::Black)));
        });
    }

    group.finish();
}

fn bench_hard_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("hard_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(20);

    let bot = ChessBot::new(Difficulty::Hard);

    for case in CASES {
        let game = game_for(case);
        let mut rng = rand::rng();

        // The hard path is deterministic; make sure it yields a move at all.
        assert!(bot.get_best_move(&game, &mut rng).is_some());

        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, _| {
            b.iter(|| bot.get_best_move(black_box(&game), &mut rng));
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_legal_moves, bench_hard_search);
criterion_main!(search_benches);

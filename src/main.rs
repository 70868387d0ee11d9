//! Terminal front-end: a human plays White against the bot from the
//! keyboard. Moves are entered as `row,col row,col` coordinates. The bot's
//! search runs on a worker thread so the input loop never sits inside a
//! potentially long hard-difficulty search.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::channel;
use std::thread;

use pixel_chess::board::Square;
use pixel_chess::engines::bot::{BotMove, ChessBot, Difficulty};
use pixel_chess::game_state::{GameState, GameStatus};
use pixel_chess::piece::Color;

fn parse_square(token: &str) -> Option<Square> {
    let (row, col) = token.split_once(',')?;
    let square: Square = (row.trim().parse().ok()?, col.trim().parse().ok()?);
    if (0..8).contains(&square.0) && (0..8).contains(&square.1) {
        Some(square)
    } else {
        None
    }
}

fn parse_move(line: &str) -> Option<(Square, Square)> {
    let mut tokens = line.split_whitespace();
    let from = parse_square(tokens.next()?)?;
    let to = parse_square(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((from, to))
}

/// Runs the bot on a worker thread and blocks for its answer.
fn bot_move_off_thread(bot: ChessBot, game: &GameState) -> Option<BotMove> {
    let (tx, rx) = channel();
    let snapshot = game.clone();
    thread::spawn(move || {
        let mut rng = rand::rng();
        let _ = tx.send(bot.get_best_move(&snapshot, &mut rng));
    });
    rx.recv().unwrap_or(None)
}

fn announce(status: GameStatus, to_move: Color) {
    match status {
        GameStatus::Check => println!("Check!"),
        GameStatus::Checkmate => match to_move {
            Color::White => println!("Checkmate. The bot wins."),
            Color::Black => println!("Checkmate. You win!"),
        },
        GameStatus::Stalemate => println!("Stalemate. Draw."),
        GameStatus::Draw => println!("Draw."),
        GameStatus::Playing => {}
    }
}

fn main() {
    env_logger::init();

    let difficulty = std::env::var("PIXEL_CHESS_DIFFICULTY")
        .ok()
        .and_then(|name| Difficulty::from_name(&name))
        .unwrap_or(Difficulty::Medium);
    let bot = ChessBot::new(difficulty);

    println!(
        "Pixel Chess - session started {} - bot difficulty {:?}",
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        bot.difficulty()
    );
    println!("You play White. Enter moves as: row,col row,col (e.g. 6,4 4,4). 'quit' exits.");

    let mut game = GameState::new();
    let stdin = io::stdin();

    loop {
        println!("\n{}", game.board);
        announce(game.game_status, game.current_player);
        if game.game_status.is_over() {
            break;
        }

        if game.current_player == Color::White {
            print!("your move> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    eprintln!("input error: {err}");
                    break;
                }
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                break;
            }

            let Some((from, to)) = parse_move(line) else {
                println!("could not read that; use: row,col row,col");
                continue;
            };
            match game.apply_move(from, to) {
                Ok(next) => game = next,
                Err(err) => println!("{err}"),
            }
        } else {
            println!("bot is thinking...");
            let Some(reply) = bot_move_off_thread(bot, &game) else {
                // Defensive: a decided game is caught above before we ask.
                break;
            };
            match game.apply_move(reply.from, reply.to) {
                Ok(next) => {
                    println!(
                        "bot plays {},{} -> {},{}",
                        reply.from.0, reply.from.1, reply.to.0, reply.to.1
                    );
                    game = next;
                }
                Err(err) => {
                    eprintln!("bot proposed an illegal move: {err}");
                    break;
                }
            }
        }
    }

    println!("\nMoves played: {}", game.move_history.len());
}

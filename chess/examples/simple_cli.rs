// Simple command-line application to play chess

use oakchess::{board::PrettyStyle, Color, Game, Move};
use std::io::{self, BufRead, Write};

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new_initial();

    loop {
        let legal = game.legal_moves();
        if let Some(outcome) = game.outcome() {
            println!("Game finished: {}", outcome);
            println!("Moves played: {}", game.notation());
            break;
        }

        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        let side = match game.side_to_move() {
            Color::White => "White",
            Color::Black => "Black",
        };
        if game.is_in_check() {
            println!("{} is in check", side);
        }
        print!("{} move: ", side);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        // Parsing only checks the syntax and that the source square is
        // occupied; whether the move is actually playable is decided by
        // matching it against the legal move list.
        let mv = match Move::from_str(s, game.board()) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };
        if !legal.contains(&mv) {
            println!("Illegal move: {}", mv);
            println!();
            continue;
        }

        game.push(mv);
        println!();
    }
}

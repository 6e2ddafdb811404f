//! # oakchess
//!
//! A small chess rules library built on a classic 8×8 mailbox board. It owns the authoritative
//! game state, generates the moves a side can make, filters them for legality, and detects
//! checkmate and stalemate. Castling, en passant, promotion and the clock-based draw rules are
//! intentionally out of scope, as is any kind of search or evaluation.
//!
//! # Example
//!
//! ```
//! use oakchess::{Game, Move};
//!
//! let mut game = Game::new_initial();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let mv = Move::from_str("e2e4", game.board()).unwrap();
//! assert!(game.legal_moves().contains(&mv));
//! game.push(mv);
//!
//! game.pop().unwrap();
//! assert_eq!(game.board(), &oakchess::Board::initial());
//! ```

pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;

pub use oakchess_base::geometry;
pub use oakchess_base::types;

pub use board::{Board, RawBoard};
pub use game::Game;
pub use movegen::MoveList;
pub use moves::Move;
pub use types::{Cell, Color, Coord, File, Outcome, Piece, Rank};

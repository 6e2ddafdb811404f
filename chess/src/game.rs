//! Game state: board, move history and terminal-state tracking

use crate::board::{Board, FenParseError};
use crate::movegen::{self, MoveList};
use crate::moves::{self, Move};
use crate::types::{Color, Outcome};

use std::fmt;

/// A game in progress: the current board plus the history of played moves
///
/// The game owns the board and the history stack exclusively. Moves are
/// appended by [`Game::push`] and taken back by [`Game::pop`]; the history
/// is never edited in the middle.
///
/// The terminal state (checkmate or stalemate) is evaluated as a by-product
/// of [`Game::legal_moves`]: when that call finds no legal moves, the
/// outcome is cached and served by [`Game::outcome`], [`Game::is_checkmate`]
/// and [`Game::is_stalemate`]. Any [`Game::push`] or [`Game::pop`]
/// invalidates the cached outcome, as it no longer describes the current
/// position.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    stack: Vec<Move>,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game {
            board,
            stack: Vec::new(),
            outcome: None,
        }
    }

    /// Creates a game from the standard starting position
    pub fn new_initial() -> Game {
        Self::new(Board::initial())
    }

    pub fn from_fen(s: &str) -> Result<Game, FenParseError> {
        Ok(Self::new(Board::from_fen(s)?))
    }

    /// Returns the current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side()
    }

    /// Returns `true` if the side to move is in check
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.board.is_check()
    }

    /// Applies `mv` and records it in the history
    ///
    /// No legality check is performed: the move is applied unconditionally,
    /// and passing a move that was not generated for the current position is
    /// a caller contract violation (see
    /// [`apply_move`](crate::moves::apply_move)). Screening input against
    /// [`Game::legal_moves`] is the embedding application's job.
    pub fn push(&mut self, mv: Move) {
        moves::apply_move(&mut self.board, mv);
        self.stack.push(mv);
        self.outcome = None;
    }

    /// Takes back the most recent move, restoring the exact previous state
    ///
    /// Returns the undone move, or `None` if the history is empty, in which
    /// case the board is left untouched.
    pub fn pop(&mut self) -> Option<Move> {
        let mv = self.stack.pop()?;
        moves::undo_move(&mut self.board, mv);
        self.outcome = None;
        Some(mv)
    }

    /// Returns all legal moves in the current position
    ///
    /// This is the legality filter: pseudo-legal moves are generated in
    /// board-scan order and each one is simulated to verify it doesn't leave
    /// the mover's own king attacked. The call also refreshes the cached
    /// outcome: an empty result means checkmate if the side to move is in
    /// check and stalemate otherwise.
    pub fn legal_moves(&mut self) -> MoveList {
        let res = movegen::legal::gen_all(&self.board);
        self.outcome = if res.is_empty() {
            if self.board.is_check() {
                Some(Outcome::Checkmate(self.board.side().inv()))
            } else {
                Some(Outcome::Stalemate)
            }
        } else {
            None
        };
        res
    }

    /// Returns the outcome cached by the last [`Game::legal_moves`] call
    ///
    /// `None` means either that the game is still going, or that the outcome
    /// has not been evaluated for the current position yet.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Checkmate(_)))
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Stalemate))
    }

    /// Number of moves played so far
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().copied()
    }

    pub fn get(&self, idx: usize) -> Move {
        self.stack[idx]
    }

    pub fn last_move(&self) -> Option<Move> {
        self.stack.last().copied()
    }

    /// Wraps the game to display the played moves in coordinate notation,
    /// separated by spaces
    pub fn notation(&self) -> NotationList<'_> {
        NotationList(self)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new_initial()
    }
}

/// Wrapper to display the move history of a [`Game`]
pub struct NotationList<'a>(&'a Game);

impl<'a> fmt::Display for NotationList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for (i, m) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

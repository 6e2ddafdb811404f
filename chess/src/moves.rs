//! Move records and the unvalidated apply/undo state transition

use crate::board::{Board, RawBoard};
use crate::types::{Cell, Color, Coord, CoordParseError, Piece};

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Error parsing a move written in coordinate notation
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("bad string length")]
    BadLength,
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
    #[error("no piece on source square {0}")]
    EmptySrc(Coord),
}

/// A single move, recorded together with everything needed to take it back
///
/// A move remembers the occupants of both squares as they were before it was
/// made, so it doubles as its own undo record: [`apply_move`] and
/// [`undo_move`] are exact inverses for the same `Move` value.
///
/// Two moves compare equal iff their source and destination coordinates
/// match; the recorded occupants are payload, not identity. An embedding
/// application can thus match a pair of user-selected squares against a
/// generated move list directly. The flip side is that a stale move replayed
/// against a different position with the same coordinates also compares
/// equal, which is why [`apply_move`] requires moves generated for the
/// current position.
#[derive(Debug, Copy, Clone)]
pub struct Move {
    src: Coord,
    dst: Coord,
    piece: Cell,
    capture: Cell,
}

impl Move {
    /// Creates a move from `src` to `dst`, recording both occupants from `b`
    pub fn new(b: &RawBoard, src: Coord, dst: Coord) -> Move {
        Move {
            src,
            dst,
            piece: b.get(src),
            capture: b.get(dst),
        }
    }

    /// Parses a move in coordinate notation (e.g. `"e2e4"`) against a board
    ///
    /// Only the syntax and the presence of a piece on the source square are
    /// checked; whether the move is actually available in the position is
    /// for the caller to decide, typically by matching the result against
    /// [`legal::gen_all`](crate::movegen::legal::gen_all).
    pub fn from_str(s: &str, b: &Board) -> Result<Move, ParseError> {
        if s.len() != 4 {
            return Err(ParseError::BadLength);
        }
        let src = s[0..2].parse::<Coord>().map_err(ParseError::BadSrc)?;
        let dst = s[2..4].parse::<Coord>().map_err(ParseError::BadDst)?;
        let mv = Move::new(b.raw(), src, dst);
        if mv.piece.is_empty() {
            return Err(ParseError::EmptySrc(src));
        }
        Ok(mv)
    }

    pub const fn src(&self) -> Coord {
        self.src
    }

    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// The occupant of the source square before the move
    pub const fn piece(&self) -> Cell {
        self.piece
    }

    /// The occupant of the destination square before the move (empty for a
    /// non-capture)
    pub const fn capture(&self) -> Cell {
        self.capture
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_occupied()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.src == other.src && self.dst == other.dst
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// Applies `mv` to the board, with no validation whatsoever
///
/// The source square becomes empty, the destination square receives the
/// moved piece, the side to move flips, and the king cache follows a moved
/// king. Captures are implicit: whatever stood on the destination square is
/// overwritten (and remains recorded in `mv` for [`undo_move`]).
///
/// The caller must pass a move generated for the current position. Applying
/// anything else silently corrupts the game state; this function does not
/// re-check the move against the board. Note that the resulting position may
/// leave the king of the side that just moved under attack; callers probing
/// candidate moves must test [`Board::is_opponent_king_attacked`] and undo
/// before doing anything else with the board.
pub fn apply_move(b: &mut Board, mv: Move) {
    b.r.put(mv.src, Cell::EMPTY);
    b.r.put(mv.dst, mv.piece);
    if mv.piece == Cell::from_parts(Color::White, Piece::King) {
        b.kings[Color::White.index()] = mv.dst;
    } else if mv.piece == Cell::from_parts(Color::Black, Piece::King) {
        b.kings[Color::Black.index()] = mv.dst;
    }
    b.r.side = b.r.side.inv();
}

/// Reverts `mv`, assuming it was the last move applied to the board
///
/// The exact inverse of [`apply_move`]: both squares get their recorded
/// occupants back, the side to move flips back, and the king cache is
/// restored for an undone king move.
pub fn undo_move(b: &mut Board, mv: Move) {
    b.r.put(mv.src, mv.piece);
    b.r.put(mv.dst, mv.capture);
    if mv.piece == Cell::from_parts(Color::White, Piece::King) {
        b.kings[Color::White.index()] = mv.src;
    } else if mv.piece == Cell::from_parts(Color::Black, Piece::King) {
        b.kings[Color::Black.index()] = mv.src;
    }
    b.r.side = b.r.side.inv();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};
    use std::mem;

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn test_size() {
        assert_eq!(mem::size_of::<Move>(), 4);
    }

    #[test]
    fn test_notation() {
        let b = Board::initial();
        let mv = Move::new(b.raw(), coord("e2"), coord("e4"));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.piece(), Cell::from_parts(Color::White, Piece::Pawn));
        assert_eq!(mv.capture(), Cell::EMPTY);
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_eq_by_coords() {
        let initial = Board::initial();
        let after = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b").unwrap();

        // Same coordinates on different boards record different occupants,
        // yet the moves compare equal.
        let a = Move::new(initial.raw(), coord("e2"), coord("e4"));
        let c = Move::new(after.raw(), coord("e2"), coord("e4"));
        assert_eq!(a, c);
        assert_ne!(a.piece(), c.piece());

        let d = Move::new(initial.raw(), coord("e2"), coord("e3"));
        assert_ne!(a, d);
    }

    #[test]
    fn test_parse() {
        let b = Board::initial();
        let mv = Move::from_str("g1f3", &b).unwrap();
        assert_eq!(mv.src(), Coord::from_parts(File::G, Rank::R1));
        assert_eq!(mv.dst(), Coord::from_parts(File::F, Rank::R3));
        assert_eq!(mv.piece(), Cell::from_parts(Color::White, Piece::Knight));

        assert_eq!(Move::from_str("e2e", &b), Err(ParseError::BadLength));
        assert_eq!(Move::from_str("e2e45", &b), Err(ParseError::BadLength));
        assert!(matches!(
            Move::from_str("i2e4", &b),
            Err(ParseError::BadSrc(_))
        ));
        assert!(matches!(
            Move::from_str("e2e9", &b),
            Err(ParseError::BadDst(_))
        ));
        assert_eq!(
            Move::from_str("e4e5", &b),
            Err(ParseError::EmptySrc(coord("e4")))
        );
    }

    #[test]
    fn test_apply_undo() {
        let mut b = Board::initial();
        let b_copy = b.clone();

        let mv = Move::new(b.raw(), coord("e2"), coord("e4"));
        apply_move(&mut b, mv);
        assert_eq!(b.get(coord("e2")), Cell::EMPTY);
        assert_eq!(
            b.get(coord("e4")),
            Cell::from_parts(Color::White, Piece::Pawn)
        );
        assert_eq!(b.side(), Color::Black);

        undo_move(&mut b, mv);
        assert_eq!(b, b_copy);
        assert_eq!(b.side(), Color::White);
    }

    #[test]
    fn test_apply_undo_capture() {
        let mut b = Board::from_fen("k7/8/8/3p4/4B3/8/8/K7 w").unwrap();
        let b_copy = b.clone();

        let mv = Move::new(b.raw(), coord("e4"), coord("d5"));
        assert!(mv.is_capture());
        apply_move(&mut b, mv);
        assert_eq!(
            b.get(coord("d5")),
            Cell::from_parts(Color::White, Piece::Bishop)
        );
        assert_eq!(b.get(coord("e4")), Cell::EMPTY);

        undo_move(&mut b, mv);
        assert_eq!(b, b_copy);
        assert_eq!(
            b.get(coord("d5")),
            Cell::from_parts(Color::Black, Piece::Pawn)
        );
    }

    #[test]
    fn test_apply_undo_king_cache() {
        let mut b = Board::from_fen("k7/8/8/8/8/8/8/4K3 w").unwrap();

        let mv = Move::new(b.raw(), coord("e1"), coord("d2"));
        apply_move(&mut b, mv);
        assert_eq!(b.king_pos(Color::White), coord("d2"));
        assert_eq!(b.king_pos(Color::Black), coord("a8"));

        undo_move(&mut b, mv);
        assert_eq!(b.king_pos(Color::White), coord("e1"));
    }
}

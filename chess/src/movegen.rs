//! Pseudo-legal and legal move generation
//!
//! Generation is split in two stages, in the classic generate-then-filter
//! manner. The per-piece generators in this module enumerate pseudo-legal
//! moves: every move allowed by piece movement, board bounds and occupancy,
//! ignoring whether the mover's own king is left attacked. [`legal::gen_all`]
//! then simulates each candidate on a scratch board and keeps only the moves
//! that don't leave the king under attack.

use crate::board::Board;
use crate::moves::{self, Move};
use crate::{geometry, types::{Color, Coord, Piece}};

use std::convert::Infallible;
use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Offsets are `(delta_file, delta_rank)` pairs; a negative rank delta moves
/// towards the eighth rank.
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ROOK_DIRS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// List of moves, backed by a fixed-capacity vector
///
/// The capacity is sufficient for any position accepted by board validation:
/// with piece counts capped at the starting army, no side can have more than
/// a few dozen pseudo-legal moves.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 256>);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Move, 256>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Move;
    type IntoIter = slice::IterMut<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

/// Sink that may abort generation early by returning an error
trait MaybeMovePush {
    type Err;

    fn push(&mut self, m: Move) -> Result<(), Self::Err>;
}

impl<T: MovePush> MaybeMovePush for T {
    type Err = Infallible;

    fn push(&mut self, m: Move) -> Result<(), Self::Err> {
        <Self as MovePush>::push(self, m);
        Ok(())
    }
}

/// The per-piece pseudo-legal generators
///
/// `side` is passed explicitly rather than read from a turn flag, so the
/// same generator serves both regular generation (for the side to move) and
/// attack queries (for the opponent).
struct MoveGenImpl<'a, P> {
    board: &'a Board,
    side: Color,
    dst: &'a mut P,
}

impl<'a, P: MaybeMovePush> MoveGenImpl<'a, P> {
    fn new(board: &'a Board, side: Color, dst: &'a mut P) -> Self {
        MoveGenImpl { board, side, dst }
    }

    fn add(&mut self, src: Coord, dst: Coord) -> Result<(), P::Err> {
        self.dst.push(Move::new(self.board.raw(), src, dst))
    }

    fn gen_pawn(&mut self, src: Coord) -> Result<(), P::Err> {
        let forward = geometry::pawn_forward_delta(self.side);
        if let Some(step) = src.shifted(0, forward) {
            if self.board.get(step).is_empty() {
                self.add(src, step)?;
                // The double step is tried only from the home rank, where
                // two squares ahead is always on the board.
                if src.rank() == geometry::pawn_home_rank(self.side) {
                    if let Some(double) = step.shifted(0, forward) {
                        if self.board.get(double).is_empty() {
                            self.add(src, double)?;
                        }
                    }
                }
            }
        }
        for delta_file in [-1, 1] {
            if let Some(capture) = src.shifted(delta_file, forward) {
                if self.board.get(capture).color() == Some(self.side.inv()) {
                    self.add(src, capture)?;
                }
            }
        }
        Ok(())
    }

    fn gen_leaper(&mut self, src: Coord, deltas: &[(isize, isize); 8]) -> Result<(), P::Err> {
        for &(delta_file, delta_rank) in deltas {
            if let Some(dst) = src.shifted(delta_file, delta_rank) {
                if self.board.get(dst).color() != Some(self.side) {
                    self.add(src, dst)?;
                }
            }
        }
        Ok(())
    }

    fn gen_slider(&mut self, src: Coord, dirs: &[(isize, isize); 4]) -> Result<(), P::Err> {
        for &(delta_file, delta_rank) in dirs {
            let mut cur = src;
            while let Some(next) = cur.shifted(delta_file, delta_rank) {
                match self.board.get(next).color() {
                    None => {
                        self.add(src, next)?;
                        cur = next;
                    }
                    Some(c) if c != self.side => {
                        self.add(src, next)?;
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
        Ok(())
    }

    fn gen_piece(&mut self, piece: Piece, src: Coord) -> Result<(), P::Err> {
        match piece {
            Piece::Pawn => self.gen_pawn(src),
            Piece::Knight => self.gen_leaper(src, &KNIGHT_DELTAS),
            Piece::Bishop => self.gen_slider(src, &BISHOP_DIRS),
            Piece::Rook => self.gen_slider(src, &ROOK_DIRS),
            Piece::Queen => {
                self.gen_slider(src, &ROOK_DIRS)?;
                self.gen_slider(src, &BISHOP_DIRS)
            }
            Piece::King => self.gen_leaper(src, &KING_DELTAS),
        }
    }

    /// Scans the whole board in row-major order (rank 8 to rank 1, file `a`
    /// to file `h`) and generates the moves of every piece of `self.side`.
    /// The scan order fixes the order of the resulting list, which is part
    /// of the interface: repeated generation on the same position yields the
    /// same sequence.
    fn gen_all(&mut self) -> Result<(), P::Err> {
        for src in Coord::iter() {
            let cell = self.board.get(src);
            if cell.color() == Some(self.side) {
                if let Some(piece) = cell.piece() {
                    self.gen_piece(piece, src)?;
                }
            }
        }
        Ok(())
    }
}

/// Generation of pseudo-legal moves
pub mod pseudolegal {
    use super::{Coord, MoveGenImpl, MoveList, MovePush};
    use crate::board::Board;

    /// Generates all pseudo-legal moves for the side to move into `dst`
    pub fn gen_all_into<P: MovePush>(b: &Board, dst: &mut P) {
        let _ = MoveGenImpl::new(b, b.side(), dst).gen_all();
    }

    /// Generates all pseudo-legal moves for the side to move
    pub fn gen_all(b: &Board) -> MoveList {
        let mut res = MoveList::new();
        gen_all_into(b, &mut res);
        res
    }

    /// Generates the pseudo-legal moves of the piece standing on `src` into
    /// `dst`
    ///
    /// The moves are generated for the occupant's own color, regardless of
    /// whose turn it is; nothing is generated for an empty square.
    pub fn gen_square_into<P: MovePush>(b: &Board, src: Coord, dst: &mut P) {
        let cell = b.get(src);
        if let (Some(color), Some(piece)) = (cell.color(), cell.piece()) {
            let _ = MoveGenImpl::new(b, color, dst).gen_piece(piece, src);
        }
    }

    /// Generates the pseudo-legal moves of the piece standing on `src`
    ///
    /// See [`gen_square_into`] for details.
    pub fn gen_square(b: &Board, src: Coord) -> MoveList {
        let mut res = MoveList::new();
        gen_square_into(b, src, &mut res);
        res
    }
}

/// Generation of legal moves
pub mod legal {
    use super::MoveList;
    use crate::board::Board;
    use crate::moves;

    /// Generates all legal moves for the side to move
    ///
    /// Starts from the pseudo-legal move list and filters it by simulating
    /// each candidate on a scratch copy of the board: the move is applied,
    /// the king of the side that just moved is tested for attack, and the
    /// move is undone. Candidates that leave the king attacked are dropped.
    /// The surviving moves keep their generation order.
    pub fn gen_all(b: &Board) -> MoveList {
        let mut res = super::pseudolegal::gen_all(b);
        let mut scratch = b.clone();
        res.retain(|&mut mv| {
            moves::apply_move(&mut scratch, mv);
            let ok = !scratch.is_opponent_king_attacked();
            moves::undo_move(&mut scratch, mv);
            ok
        });
        res
    }
}

struct DetectAttack {
    target: Coord,
}

impl MaybeMovePush for DetectAttack {
    type Err = ();

    fn push(&mut self, m: Move) -> Result<(), ()> {
        if m.dst() == self.target {
            return Err(());
        }
        Ok(())
    }
}

/// Returns `true` if some pseudo-legal move of `color` ends on `coord`
///
/// This reuses the single-sided move generator to answer attack queries
/// instead of maintaining a separate attack map; generation aborts at the
/// first matching move. For an occupied square this coincides with "the
/// occupant can be captured by `color`", which is the only way the engine
/// uses it (the square under test always holds a king).
pub fn is_cell_attacked(b: &Board, coord: Coord, color: Color) -> bool {
    let mut detect = DetectAttack { target: coord };
    MoveGenImpl::new(b, color, &mut detect).gen_all().is_err()
}

struct LegalFilter<'a, P> {
    board: Board,
    inner: &'a mut P,
}

impl<'a, P: MaybeMovePush> MaybeMovePush for LegalFilter<'a, P> {
    type Err = P::Err;

    fn push(&mut self, mv: Move) -> Result<(), Self::Err> {
        moves::apply_move(&mut self.board, mv);
        let is_legal = !self.board.is_opponent_king_attacked();
        moves::undo_move(&mut self.board, mv);
        match is_legal {
            true => self.inner.push(mv),
            false => Ok(()),
        }
    }
}

struct ErrOnFirst;

impl MaybeMovePush for ErrOnFirst {
    type Err = ();

    fn push(&mut self, _mv: Move) -> Result<(), ()> {
        Err(())
    }
}

/// Returns `true` if the side to move has at least one legal move
///
/// Generation stops as soon as the first legal move is found, so this is
/// cheaper than generating the full legal list just to test for emptiness.
pub fn has_legal_moves(b: &Board) -> bool {
    let mut err_on_first = ErrOnFirst;
    let mut filter = LegalFilter {
        board: b.clone(),
        inner: &mut err_on_first,
    };
    MoveGenImpl::new(b, b.side(), &mut filter).gen_all().is_err()
}

//! Board and related things

use crate::movegen;
use crate::types::{self, Cell, Color, Coord, File, Outcome, Piece, Rank};

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// One of the sides doesn't have a king
    #[error("no king of color {0:?}")]
    NoKing(Color),
    /// More pieces of some kind than the starting army contains
    ///
    /// Without promotion, captures only ever shrink piece counts, so the
    /// starting counts (8 pawns, 2 knights, 2 bishops, 2 rooks, 1 queen,
    /// 1 king per side) are hard upper bounds for any reachable position.
    #[error("too many pieces {0:?}")]
    TooManyPieces(Cell),
    /// There is a pawn on the 1st or on the 8th rank
    #[error("invalid pawn position {0}")]
    InvalidPawn(Coord),
    /// Opponent's king is under attack
    #[error("opponent's king is attacked")]
    OpponentKingAttacked,
}

/// Error parsing the piece-placement part of a position string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error parsing [`RawBoard`] from a position string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum RawFenParseError {
    /// Position string contains non-ASCII characters
    #[error("non-ASCII data in position string")]
    NonAscii,
    /// Position string doesn't have a board part
    #[error("board not specified")]
    NoBoard,
    /// Error parsing the board part
    #[error("bad board: {0}")]
    Board(#[from] CellsParseError),
    /// Position string doesn't have a move side part
    #[error("no move side")]
    NoMoveSide,
    /// Error parsing the move side part
    #[error("bad move side: {0}")]
    MoveSide(#[from] types::ColorParseError),
}

/// Error parsing [`Board`] from a position string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum FenParseError {
    /// Position cannot be parsed
    #[error("cannot parse position: {0}")]
    Fen(#[from] RawFenParseError),
    /// Position was parsed, but it's invalid
    #[error("invalid position: {0}")]
    Valid(#[from] ValidateError),
}

/// Raw chess board
///
/// A raw board is just the 8×8 cell grid plus the side to move, with no
/// validity guarantees. It can be used to build a position programmatically;
/// convert it to a [`Board`] via [`Board::try_from()`] once the pieces are
/// in place.
///
/// # Example
///
/// ```
/// # use oakchess::{RawBoard, Board, File, Rank, Color, Piece, Cell};
/// #
/// let mut raw = RawBoard::empty();
/// raw.put2(File::B, Rank::R2, Cell::from_parts(Color::White, Piece::King));
/// raw.put2(File::D, Rank::R5, Cell::from_parts(Color::Black, Piece::King));
///
/// let board: Board = raw.try_into().unwrap();
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8 w");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    /// Contents of the board, in board-scan order (`a8` first, `h1` last)
    ///
    /// The indices in this array are the indices of coordinates. You might
    /// probably want to use the functions like [`RawBoard::get()`] or
    /// [`RawBoard::put()`] instead of indexing this array directly.
    pub cells: [Cell; 64],
    /// Side to move
    pub side: Color,
}

impl RawBoard {
    /// Returns an empty `RawBoard` with White to move
    #[inline]
    pub const fn empty() -> RawBoard {
        RawBoard {
            cells: [Cell::EMPTY; 64],
            side: Color::White,
        }
    }

    /// Returns a board with the standard starting position
    pub fn initial() -> RawBoard {
        let mut res = RawBoard::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Parses a board from a position string
    ///
    /// Does the same as [`RawBoard::from_str`]. It is recommended to use this
    /// function instead of `from_str()` for better readability.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<RawBoard, RawFenParseError> {
        RawBoard::from_str(fen)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        unsafe { *self.cells.get_unchecked(c.index()) }
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        unsafe {
            *self.cells.get_unchecked_mut(c.index()) = cell;
        }
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use oakchess::{RawBoard, board::PrettyStyle};
    /// #
    /// let r = RawBoard::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    /// W|abcdefgh
    /// "#;
    /// assert_eq!(r.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { raw: self, style }
    }

    /// Converts the board into a position string
    ///
    /// The result carries the piece placement and side-to-move fields of
    /// FEN. Does the same as `RawBoard::to_string()`.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for RawBoard {
    #[inline]
    fn default() -> RawBoard {
        RawBoard::empty()
    }
}

/// Board that contains a valid position
///
/// This board is used for literally every chess operation: move generation,
/// making and unmaking moves, verifying for check, checkmate and stalemate.
///
/// Alongside the raw cells it caches the square of each king, so check tests
/// don't need to scan the board for a king. The cache is maintained by
/// [`apply_move`](crate::moves::apply_move) and
/// [`undo_move`](crate::moves::undo_move) on every king move.
///
/// # Validity
///
/// The board must always stay valid (i.e. `Ok(b.clone()) ==
/// b.raw().try_into()` must hold). The only allowed exception is an attack
/// on the opponent's king after applying a candidate move. In this case, you
/// must call [`Board::is_opponent_king_attacked()`] and undo the offending
/// move before doing anything else with the board.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) r: RawBoard,
    pub(crate) kings: [Coord; 2],
}

impl Board {
    /// Returns a board with the standard starting position
    pub fn initial() -> Board {
        RawBoard::initial().try_into().unwrap()
    }

    /// Parses a board from a position string
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this
    /// function instead of `from_str()` for better readability.
    pub fn from_fen(fen: &str) -> Result<Board, FenParseError> {
        Board::from_str(fen)
    }

    /// Returns a view over the raw board
    #[inline]
    pub fn raw(&self) -> &RawBoard {
        &self.r
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.r.get(c)
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.r.get2(file, rank)
    }

    /// Returns side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.r.side
    }

    /// Returns the position of the king of color `c`
    ///
    /// This is an O(1) read of the king cache.
    #[inline]
    pub fn king_pos(&self, c: Color) -> Coord {
        self.kings[c.index()]
    }

    /// Returns `true` if the current side is in check
    #[inline]
    pub fn is_check(&self) -> bool {
        let c = self.r.side;
        movegen::is_cell_attacked(self, self.king_pos(c), c.inv())
    }

    /// Returns `true` if the opponent's king is under attack
    ///
    /// This only happens after applying an illegal candidate move; in that
    /// case the move must be undone before doing anything else. See doc for
    /// [`Board`] for more details.
    #[inline]
    pub fn is_opponent_king_attacked(&self) -> bool {
        let c = self.r.side;
        movegen::is_cell_attacked(self, self.king_pos(c.inv()), c)
    }

    /// Returns `true` if the current side has at least one legal move
    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        movegen::has_legal_moves(self)
    }

    /// Calculates the current outcome on the board
    ///
    /// Returns `None` while the side to move still has a legal move. This
    /// function can be computationally expensive, as it calls
    /// [`movegen::has_legal_moves`].
    #[inline]
    pub fn calc_outcome(&self) -> Option<Outcome> {
        if self.has_legal_moves() {
            return None;
        }
        if self.is_check() {
            Some(Outcome::Checkmate(self.r.side.inv()))
        } else {
            Some(Outcome::Stalemate)
        }
    }

    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// See docs for [`RawBoard::pretty()`] for more usage details.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.r.pretty(style)
    }

    /// Converts the board into a position string
    ///
    /// Does the same as `Board::to_string()`.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Board {
    #[inline]
    fn eq(&self, other: &Board) -> bool {
        self.r == other.r
    }
}

impl Eq for Board {}

impl Hash for Board {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state)
    }
}

const fn army_limit(p: Piece) -> usize {
    match p {
        Piece::Pawn => 8,
        Piece::Knight | Piece::Bishop | Piece::Rook => 2,
        Piece::Queen | Piece::King => 1,
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: RawBoard) -> Result<Board, ValidateError> {
        // Count the pieces and locate the kings
        let mut counts = [0_usize; Cell::COUNT];
        let mut kings = [None; 2];
        for (idx, cell) in raw.cells.iter().enumerate() {
            let coord = Coord::from_index(idx);
            counts[cell.index()] += 1;
            if cell.piece() == Some(Piece::King) {
                if let Some(color) = cell.color() {
                    kings[color.index()].get_or_insert(coord);
                }
            }
            if cell.piece() == Some(Piece::Pawn)
                && matches!(coord.rank(), Rank::R1 | Rank::R8)
            {
                return Err(ValidateError::InvalidPawn(coord));
            }
        }

        for color in [Color::White, Color::Black] {
            for piece in Piece::iter() {
                let cell = Cell::from_parts(color, piece);
                if counts[cell.index()] > army_limit(piece) {
                    return Err(ValidateError::TooManyPieces(cell));
                }
            }
        }

        let kings = [
            kings[Color::White.index()].ok_or(ValidateError::NoKing(Color::White))?,
            kings[Color::Black.index()].ok_or(ValidateError::NoKing(Color::Black))?,
        ];

        let res = Board { r: raw, kings };
        if res.is_opponent_king_attacked() {
            return Err(ValidateError::OpponentKingAttacked);
        }

        Ok(res)
    }
}

impl TryFrom<&RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: &RawBoard) -> Result<Board, ValidateError> {
        (*raw).try_into()
    }
}

/// Style for [`RawBoard::pretty()`] and [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`RawBoard::pretty()`] for more details.
pub struct Pretty<'a> {
    raw: &'a RawBoard,
    style: PrettyStyle,
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    type Error = CellsParseError;

    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut pos = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for b in s.bytes() {
        match b {
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                file += add;
                pos += add;
            }
            b'/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                cells[pos] = Cell::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                file += 1;
                pos += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for RawBoard {
    type Err = RawFenParseError;

    /// Parses a position string
    ///
    /// The string must carry the piece placement and side-to-move fields of
    /// FEN. Since this ruleset tracks no castling rights, en passant square
    /// or move counters, any further whitespace-separated fields are
    /// accepted and ignored, so full FENs remain usable.
    fn from_str(s: &str) -> Result<RawBoard, Self::Err> {
        type Error = RawFenParseError;

        if !s.is_ascii() {
            return Err(Error::NonAscii);
        }
        let mut iter = s.split(' ').fuse();

        let cells = parse_cells(iter.next().ok_or(Error::NoBoard)?)?;
        let side = Color::from_str(iter.next().ok_or(Error::NoMoveSide)?)?;

        Ok(RawBoard { cells, side })
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(RawBoard::from_str(s)?.try_into()?)
    }
}

fn format_cells(cells: &[Cell; 64], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for rank in Rank::iter() {
        if rank.index() != 0 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for file in File::iter() {
            let cell = cells[Coord::from_parts(file, rank).index()];
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", (b'0' + empty) as char)?;
        }
    }
    Ok(())
}

impl Display for RawBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)?;
        write!(f, " {}", self.side)?;
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.r.fmt(f)
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const WHITE_INDICATOR: char;
    const BLACK_INDICATOR: char;

    fn cell(c: Cell) -> char;

    fn indicator(c: Color) -> char {
        match c {
            Color::White => Self::WHITE_INDICATOR,
            Color::Black => Self::BLACK_INDICATOR,
        }
    }

    fn fmt(r: &RawBoard, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(r.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", Self::indicator(r.side), Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const WHITE_INDICATOR: char = 'W';
    const BLACK_INDICATOR: char = 'B';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const WHITE_INDICATOR: char = '○';
    const BLACK_INDICATOR: char = '●';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.raw, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.raw, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_size() {
        assert_eq!(mem::size_of::<RawBoard>(), 65);
        assert_eq!(mem::size_of::<Board>(), 67);
    }

    #[test]
    fn test_initial() {
        const INI_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

        assert_eq!(RawBoard::initial().to_string(), INI_FEN);
        assert_eq!(Board::initial().to_string(), INI_FEN);
        assert_eq!(RawBoard::from_str(INI_FEN), Ok(RawBoard::initial()));
        assert_eq!(Board::from_str(INI_FEN), Ok(Board::initial()));

        assert_eq!(
            Board::initial().king_pos(Color::White),
            Coord::from_parts(File::E, Rank::R1)
        );
        assert_eq!(
            Board::initial().king_pos(Color::Black),
            Coord::from_parts(File::E, Rank::R8)
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let full = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(RawBoard::from_fen(full), Ok(RawBoard::initial()));
        assert_eq!(Board::from_fen(full), Ok(Board::initial()));
    }

    #[test]
    fn test_midgame() {
        const FEN: &str = "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w";

        let board = Board::from_fen(FEN).unwrap();
        assert_eq!(board.as_fen(), FEN);
        assert_eq!(
            board.get2(File::B, Rank::R4),
            Cell::from_parts(Color::Black, Piece::Bishop)
        );
        assert_eq!(
            board.get2(File::F, Rank::R2),
            Cell::from_parts(Color::White, Piece::Queen)
        );
        assert_eq!(
            board.king_pos(Color::White),
            Coord::from_parts(File::H, Rank::R1)
        );
        assert_eq!(
            board.king_pos(Color::Black),
            Coord::from_parts(File::G, Rank::R8)
        );
        assert_eq!(board.raw().side, Color::White);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Board::from_fen("8/8/8/3k4/8/8/8/8 w"),
            Err(FenParseError::Valid(ValidateError::NoKing(Color::White)))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/4K3 b"),
            Err(FenParseError::Valid(ValidateError::NoKing(Color::Black)))
        );
        assert_eq!(
            Board::from_fen("k7/8/8/8/8/8/8/QQ2K3 w"),
            Err(FenParseError::Valid(ValidateError::TooManyPieces(
                Cell::from_parts(Color::White, Piece::Queen)
            )))
        );
        assert_eq!(
            Board::from_fen("k7/pppppppp/pppppppp/8/8/8/8/4K3 w"),
            Err(FenParseError::Valid(ValidateError::TooManyPieces(
                Cell::from_parts(Color::Black, Piece::Pawn)
            )))
        );
        assert_eq!(
            Board::from_fen("kK6/8/8/8/8/8/8/4K3 w"),
            Err(FenParseError::Valid(ValidateError::TooManyPieces(
                Cell::from_parts(Color::White, Piece::King)
            )))
        );
        assert_eq!(
            Board::from_fen("k6P/8/8/8/8/8/8/4K3 w"),
            Err(FenParseError::Valid(ValidateError::InvalidPawn(
                Coord::from_parts(File::H, Rank::R8)
            )))
        );
        assert_eq!(
            Board::from_fen("k6R/8/8/8/8/8/8/K7 w"),
            Err(FenParseError::Valid(ValidateError::OpponentKingAttacked))
        );
        // Same position with Black to move is fine: the attacked king has
        // the move.
        assert!(Board::from_fen("k6R/8/8/8/8/8/8/K7 b").is_ok());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            RawBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(RawFenParseError::NoMoveSide)
        );
        assert_eq!(
            RawBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w"),
            Err(RawFenParseError::Board(CellsParseError::Underflow))
        );
        assert_eq!(
            RawBoard::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(RawFenParseError::Board(CellsParseError::RankOverflow(
                Rank::R7
            )))
        );
        assert_eq!(
            RawBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x"),
            Err(RawFenParseError::MoveSide(
                types::ColorParseError::UnexpectedChar('x')
            ))
        );
        assert!(matches!(
            RawBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w"),
            Err(RawFenParseError::Board(CellsParseError::UnexpectedChar('Z')))
        ));
    }

    #[test]
    fn test_check() {
        let b = Board::from_fen("k7/8/8/8/8/8/5q2/4K3 w").unwrap();
        assert!(b.is_check());
        assert!(!b.is_opponent_king_attacked());

        let b = Board::from_fen("k7/8/8/8/8/8/8/4K3 w").unwrap();
        assert!(!b.is_check());
    }

    #[test]
    fn test_outcome() {
        let b = Board::initial();
        assert_eq!(b.calc_outcome(), None);
        assert!(b.has_legal_moves());

        // Back-rank mate
        let b = Board::from_fen("R3k3/8/4K3/8/8/8/8/8 b").unwrap();
        assert!(!b.has_legal_moves());
        assert_eq!(b.calc_outcome(), Some(Outcome::Checkmate(Color::White)));

        // Queen stalemate in the corner
        let b = Board::from_fen("k7/2Q5/2K5/8/8/8/8/8 b").unwrap();
        assert!(!b.has_legal_moves());
        assert_eq!(b.calc_outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn test_pretty() {
        let b = Board::from_fen("1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K b")
            .unwrap();

        let res = r#"
8|.rq.r.k.
7|.p...ppp
6|pB...n..
5|...ppP..
4|Pbb.P...
3|.PN..B..
2|..P..QPP
1|R.R....K
-+--------
B|abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());

        let res = r#"
8│.♜♛.♜.♚.
7│.♟...♟♟♟
6│♟♗...♞..
5│...♟♟♙..
4│♙♝♝.♙...
3│.♙♘..♗..
2│..♙..♕♙♙
1│♖.♖....♔
─┼────────
●│abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    }
}

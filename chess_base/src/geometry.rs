use crate::types::{Color, Rank};

pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank-index delta of a single pawn step. White pawns move towards rank 8,
/// i.e. towards smaller rank indices.
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, File};

    #[test]
    fn test_pawn_geometry() {
        let e2 = Coord::from_parts(File::E, Rank::R2);
        let step = e2.shifted(0, pawn_forward_delta(Color::White)).unwrap();
        assert_eq!(step, Coord::from_parts(File::E, Rank::R3));
        assert_eq!(e2.rank(), pawn_home_rank(Color::White));

        let d7 = Coord::from_parts(File::D, Rank::R7);
        let step = d7.shifted(0, pawn_forward_delta(Color::Black)).unwrap();
        assert_eq!(step, Coord::from_parts(File::D, Rank::R6));
        assert_eq!(d7.rank(), pawn_home_rank(Color::Black));
    }

    #[test]
    fn test_back_rank() {
        assert_eq!(back_rank(Color::White), Rank::R1);
        assert_eq!(back_rank(Color::Black), Rank::R8);
    }
}

//! Precomputed diagonal geometry, indexed by `Square::index()` and `Direction::index()`.

use once_cell::sync::Lazy;

use super::{Bitboard, Direction, Square, NUM_SQUARES};

/// A jump from some square: the square jumped over and the landing square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Jump {
    pub(crate) over: Square,
    pub(crate) land: Square,
}

/// Neighbouring square one diagonal step away, if on the board.
pub(crate) static STEPS: Lazy<[[Option<Square>; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut steps = [[None; 4]; NUM_SQUARES];
    for sq in Square::all() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            steps[sq.index()][dir.index()] = sq.offset(dr, dc);
        }
    }
    steps
});

/// Jump geometry two diagonal steps away; `None` if the landing square is off the board.
pub(crate) static JUMPS: Lazy<[[Option<Jump>; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut jumps = [[None; 4]; NUM_SQUARES];
    for sq in Square::all() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            jumps[sq.index()][dir.index()] = sq
                .offset(dr, dc)
                .zip(sq.offset(2 * dr, 2 * dc))
                .map(|(over, land)| Jump { over, land });
        }
    }
    jumps
});

/// Every square along a diagonal ray to the board edge, excluding the origin.
pub(crate) static RAYS: Lazy<[[Bitboard; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 4]; NUM_SQUARES];
    for sq in Square::all() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let mut mask = Bitboard::EMPTY;
            let mut cur = sq.offset(dr, dc);
            while let Some(next) = cur {
                mask.insert(next);
                cur = next.offset(dr, dc);
            }
            rays[sq.index()][dir.index()] = mask;
        }
    }
    rays
});

#[inline]
pub(crate) fn step(sq: Square, dir: Direction) -> Option<Square> {
    STEPS[sq.index()][dir.index()]
}

#[inline]
pub(crate) fn jump(sq: Square, dir: Direction) -> Option<Jump> {
    JUMPS[sq.index()][dir.index()]
}

#[inline]
pub(crate) fn ray(sq: Square, dir: Direction) -> Bitboard {
    RAYS[sq.index()][dir.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_one_step_and_one_jump() {
        let corner = Square(5, 0);
        let steps: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|&d| step(corner, d))
            .collect();
        assert_eq!(steps, vec![Square(4, 1)]);
        assert_eq!(
            jump(corner, Direction::UpRight),
            Some(Jump {
                over: Square(4, 1),
                land: Square(3, 2)
            })
        );
        assert_eq!(jump(corner, Direction::UpLeft), None);
    }

    #[test]
    fn jump_needs_room_for_landing() {
        assert_eq!(jump(Square(1, 2), Direction::UpLeft), None);
        assert!(step(Square(1, 2), Direction::UpLeft).is_some());
    }

    #[test]
    fn rays_run_to_the_edge() {
        let r = ray(Square(5, 0), Direction::UpRight);
        assert_eq!(r.popcount(), 5);
        assert!(r.contains(Square(0, 5)));
        assert!(!r.contains(Square(5, 0)));
        assert!(ray(Square(0, 3), Direction::UpLeft).is_empty());
    }
}

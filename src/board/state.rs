use rand::Rng;

use super::{Bitboard, Cell, Piece, PieceKind, Player, Square, BOARD_SIZE};

/// Pieces on the board at the start of a game, six per side.
pub const INITIAL_PIECE_COUNT: usize = 12;

/// Obstacles placed when a game starts, unless configured otherwise.
pub const DEFAULT_OBSTACLE_COUNT: usize = 2;

/// Rows each side starts on.
const PLAYER_TWO_START_ROWS: [usize; 2] = [0, 1];
const PLAYER_ONE_START_ROWS: [usize; 2] = [BOARD_SIZE - 2, BOARD_SIZE - 1];

/// Game state: piece grid plus the current obstacle set.
///
/// Cloning is cheap (a fixed 6x6 grid and a bitboard), and search relies on
/// it: every branch works on its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) obstacles: Bitboard,
    pub(crate) initial_obstacle_count: usize,
}

impl Board {
    /// Starting position with `obstacle_count` obstacles sampled from `rng`.
    pub fn new<R: Rng + ?Sized>(obstacle_count: usize, rng: &mut R) -> Self {
        let mut board = Board::starting_position(obstacle_count);
        let obstacles = board.sample_obstacles(obstacle_count, rng);
        board.set_obstacles(obstacles);
        board
    }

    /// Starting piece placement with no obstacles placed yet.
    ///
    /// `obstacle_count` is recorded as the baseline for later refreshes.
    #[must_use]
    pub fn starting_position(obstacle_count: usize) -> Self {
        let mut board = Board::empty();
        board.initial_obstacle_count = obstacle_count;
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            if PLAYER_TWO_START_ROWS.contains(&sq.row()) {
                board.set_piece(sq, Some(Piece::man(Player::Two)));
            } else if PLAYER_ONE_START_ROWS.contains(&sq.row()) {
                board.set_piece(sq, Some(Piece::man(Player::One)));
            }
        }
        board
    }

    /// A board with no pieces and no obstacles.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
            obstacles: Bitboard::EMPTY,
            initial_obstacle_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub fn is_within_bounds(&self, row: isize, col: isize) -> bool {
        Square::from_coords(row, col).is_some()
    }

    /// Look up a coordinate; off-board and obstacle cells are `Cell::Invalid`.
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Cell {
        Square::from_coords(row, col).map_or(Cell::Invalid, |sq| self.cell(sq))
    }

    /// Look up a square; obstacle cells are `Cell::Invalid`.
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        if self.obstacles.contains(sq) {
            return Cell::Invalid;
        }
        match self.squares[sq.row()][sq.col()] {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }

    /// True only for an in-bounds, obstacle-free, unoccupied dark square.
    #[must_use]
    pub fn is_empty(&self, row: isize, col: isize) -> bool {
        Square::from_coords(row, col).is_some_and(|sq| self.is_empty_square(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        sq.is_dark() && matches!(self.cell(sq), Cell::Empty)
    }

    #[must_use]
    pub fn is_obstacle(&self, row: isize, col: isize) -> bool {
        Square::from_coords(row, col).is_some_and(|sq| self.obstacles.contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_obstacle_square(&self, sq: Square) -> bool {
        self.obstacles.contains(sq)
    }

    /// Piece on a square, ignoring obstacles (a piece never shares one).
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    /// Relocate the piece on `from` to `to`, crowning a man that reaches its
    /// promotion row. Callers pass generator-produced moves only.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        debug_assert!(
            self.piece_at(from).is_some(),
            "move_piece from empty square {from}"
        );
        debug_assert!(
            !self.obstacles.contains(to),
            "move_piece onto obstacle {to}"
        );
        let Some(mut piece) = self.piece_at(from) else {
            return;
        };
        self.set_piece(from, None);
        if piece.is_man() && to.row() == piece.player.promotion_row() {
            piece = piece.crowned();
        }
        self.set_piece(to, Some(piece));
    }

    /// Clear a square; obstacle squares are left alone.
    pub fn remove_piece(&mut self, sq: Square) {
        if !self.obstacles.contains(sq) {
            self.set_piece(sq, None);
        }
    }

    /// Crown the man on `sq`. No-op for kings and empty squares.
    pub fn promote(&mut self, sq: Square) {
        if let Some(piece) = self.piece_at(sq) {
            self.set_piece(sq, Some(piece.crowned()));
        }
    }

    /// Occupied squares of `player` with their pieces, in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.player == player)
                .map(|piece| (sq, piece))
        })
    }

    /// Squares holding any piece
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        Square::all()
            .filter(|&sq| self.piece_at(sq).is_some())
            .collect()
    }

    #[must_use]
    pub fn count(&self, player: Player, kind: PieceKind) -> usize {
        self.pieces(player)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupied().popcount() as usize
    }

    /// Pieces captured since the start position
    #[must_use]
    pub fn pieces_removed(&self) -> usize {
        INITIAL_PIECE_COUNT.saturating_sub(self.piece_count())
    }

    #[inline]
    #[must_use]
    pub fn obstacles(&self) -> Bitboard {
        self.obstacles
    }

    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.popcount() as usize
    }

    #[inline]
    #[must_use]
    pub fn initial_obstacle_count(&self) -> usize {
        self.initial_obstacle_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position(2);
        assert_eq!(board.piece_count(), INITIAL_PIECE_COUNT);
        assert_eq!(board.count(Player::One, PieceKind::Man), 6);
        assert_eq!(board.count(Player::Two, PieceKind::Man), 6);
        assert_eq!(board.piece_at(Square(0, 1)), Some(Piece::man(Player::Two)));
        assert_eq!(board.piece_at(Square(5, 0)), Some(Piece::man(Player::One)));
        assert_eq!(board.piece_at(Square(0, 0)), None);
        assert!(board.obstacles().is_empty());
        assert_eq!(board.initial_obstacle_count(), 2);
    }

    #[test]
    fn new_board_places_obstacles_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(2, &mut rng);
        assert_eq!(board.obstacle_count(), 2);
        for sq in board.obstacles() {
            assert!(sq.is_dark());
            assert!(board.piece_at(sq).is_none());
            assert!((2..=3).contains(&sq.row()));
        }
    }

    #[test]
    fn out_of_bounds_queries_are_invalid() {
        let board = Board::starting_position(0);
        assert_eq!(board.get(-1, 0), Cell::Invalid);
        assert_eq!(board.get(0, 6), Cell::Invalid);
        assert!(!board.is_empty(6, 1));
        assert!(!board.is_within_bounds(-1, 3));
        assert_eq!(
            board.get(0, 1),
            Cell::Occupied(Piece::man(Player::Two))
        );
    }

    #[test]
    fn light_squares_are_never_empty() {
        let board = Board::empty();
        assert!(!board.is_empty(2, 2));
        assert!(board.is_empty(2, 3));
    }

    #[test]
    fn obstacle_cells_are_invalid_and_not_empty() {
        let mut board = Board::empty();
        board.obstacles.insert(Square(2, 3));
        assert_eq!(board.get(2, 3), Cell::Invalid);
        assert!(!board.is_empty(2, 3));
        assert!(board.is_obstacle(2, 3));
        assert!(!board.is_obstacle(-1, 3));
    }

    #[test]
    fn move_piece_crowns_on_far_row() {
        let mut board = Board::empty();
        board.set_piece(Square(1, 2), Some(Piece::man(Player::One)));
        board.move_piece(Square(1, 2), Square(0, 1));
        assert_eq!(board.piece_at(Square(0, 1)), Some(Piece::king(Player::One)));
        assert_eq!(board.piece_at(Square(1, 2)), None);

        board.set_piece(Square(4, 1), Some(Piece::man(Player::Two)));
        board.move_piece(Square(4, 1), Square(5, 2));
        assert_eq!(board.piece_at(Square(5, 2)), Some(Piece::king(Player::Two)));
    }

    #[test]
    fn move_piece_does_not_crown_on_own_back_row() {
        let mut board = Board::empty();
        board.set_piece(Square(1, 2), Some(Piece::king(Player::Two)));
        board.move_piece(Square(1, 2), Square(0, 1));
        assert_eq!(board.piece_at(Square(0, 1)), Some(Piece::king(Player::Two)));

        board.set_piece(Square(4, 3), Some(Piece::man(Player::One)));
        board.move_piece(Square(4, 3), Square(3, 4));
        assert_eq!(board.piece_at(Square(3, 4)), Some(Piece::man(Player::One)));
    }

    #[test]
    fn remove_piece_skips_obstacles() {
        let mut board = Board::starting_position(0);
        board.remove_piece(Square(0, 1));
        assert_eq!(board.piece_at(Square(0, 1)), None);
        assert_eq!(board.pieces_removed(), 1);
    }

    #[test]
    fn promote_crowns_in_place() {
        let mut board = Board::starting_position(0);
        board.promote(Square(1, 0));
        assert_eq!(board.piece_at(Square(1, 0)), Some(Piece::king(Player::Two)));
        assert_eq!(board.count(Player::Two, PieceKind::King), 1);
    }
}

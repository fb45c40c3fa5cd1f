//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: The nine cell contents (eight numbered tiles and the blank),
//!   each with a fixed goal cell.
//! - `Position`: A `(row, col)` cell coordinate on the 3x3 grid.
//! - `Board`: One puzzle configuration, with legal-move generation, the goal
//!   test and the heuristic estimates used by greedy search.
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board. The board is always square.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board (and of distinct tiles, blank included).
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Offsets `(d_row, d_col)` from the blank to the neighbors whose tiles can
/// slide into it, in successor emission order: left, up, down, right.
const SUCCESSOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// One of the nine cell contents.
///
/// Tile identity is all a tile carries: two tiles are equal iff they are the
/// same variant. The discriminant doubles as the row-major index of the
/// tile's goal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    /// The empty cell. Its goal cell is the top-left corner.
    Blank = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
}

impl Tile {
    /// Every tile, ordered by goal cell (row-major).
    pub const ALL: [Tile; CELL_COUNT] = [
        Tile::Blank,
        Tile::One,
        Tile::Two,
        Tile::Three,
        Tile::Four,
        Tile::Five,
        Tile::Six,
        Tile::Seven,
        Tile::Eight,
    ];

    /// Row-major index of this tile's goal cell.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the tile whose goal cell has row-major index `i`, if any.
    pub fn from_index(i: usize) -> Option<Tile> {
        Tile::ALL.get(i).copied()
    }

    /// Returns the cell this tile occupies in the goal configuration.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Position, Tile};
    /// assert_eq!(Tile::Blank.goal_position(), Position::new(0, 0));
    /// assert_eq!(Tile::Five.goal_position(), Position::new(1, 2));
    /// ```
    pub fn goal_position(self) -> Position {
        Position::new(self.index() / BOARD_SIZE, self.index() % BOARD_SIZE)
    }

    /// Converts a digit label (`'1'..='8'`) to its tile.
    ///
    /// The blank has no label, so `'0'` and every other character yield `None`.
    pub fn from_label(label: char) -> Option<Tile> {
        match label {
            '1'..='8' => label.to_digit(10).and_then(|d| Tile::from_index(d as usize)),
            _ => None,
        }
    }

    /// Converts the tile to its character representation: its digit, or a
    /// single space for the blank.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Tile;
    /// assert_eq!(Tile::Seven.to_char(), '7');
    /// assert_eq!(Tile::Blank.to_char(), ' ');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Tile::Blank => ' ',
            _ => char::from(b'0' + self as u8),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cell coordinate on the board. Both components are in `0..BOARD_SIZE`
/// for every position a `Board` hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Returns the position shifted by `(d_row, d_col)`, or `None` if it
    /// falls off the board.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True iff the two cells share an edge.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// One 8-puzzle configuration: a bijective mapping from the nine cells to the
/// nine tiles.
///
/// Every constructor guarantees the invariant that each tile appears exactly
/// once (so there is exactly one blank). A `Board` is a small `Copy` value;
/// copying it yields a fully independent board, which is what search
/// algorithms rely on when branching from a shared ancestor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns the goal configuration: blank in the top-left corner, then
    /// tiles 1 to 8 in row-major order.
    pub fn solved() -> Self {
        let mut grid = [[Tile::Blank; BOARD_SIZE]; BOARD_SIZE];
        for tile in Tile::ALL {
            let pos = tile.goal_position();
            grid[pos.row][pos.col] = tile;
        }
        Board { grid }
    }

    /// Creates a board from a uniformly random permutation of the nine tiles,
    /// using the thread-local random number generator.
    ///
    /// No solvability check is made: half of all permutations cannot reach
    /// the goal. See [`Board::is_solvable`].
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut rand::thread_rng())
    }

    /// Creates a random board from a seeded `SmallRng`. The same seed always
    /// produces the same board.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator.
    pub fn generate_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate_with_rng(&mut rng)
    }

    /// Creates a random board by shuffling the nine tiles with `rng`
    /// (Fisher-Yates) and laying them out row by row.
    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = Tile::ALL;
        tiles.shuffle(rng);

        // Lay the shuffled tiles out row-major
        let mut grid = [[Tile::Blank; BOARD_SIZE]; BOARD_SIZE];
        for (i, tile) in tiles.into_iter().enumerate() {
            grid[i / BOARD_SIZE][i % BOARD_SIZE] = tile;
        }
        Board { grid }
    }

    /// Like [`Board::generate_with_rng`], but draws again until the board can
    /// reach the goal.
    pub fn generate_solvable_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let board = Self::generate_with_rng(rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Creates a board from an explicit grid.
    ///
    /// # Returns
    /// * `Ok(Board)` if every tile appears exactly once.
    /// * `Err(PuzzleError::DuplicateTile)` naming the first repeated tile
    ///   otherwise. With nine cells and no repeats, no tile can be missing.
    pub fn from_grid(grid: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELL_COUNT];
        // Nine cells, nine tiles: a repeat is the only way to break the bijection
        for tile in grid.iter().flatten() {
            if seen[tile.index()] {
                return Err(PuzzleError::DuplicateTile { tile: *tile });
            }
            seen[tile.index()] = true;
        }
        Ok(Board { grid })
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        self.grid[r][c]
    }

    /// Returns the tile at `pos`.
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.grid[pos.row][pos.col]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn get_grid(&self) -> &[[Tile; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the cell currently holding `tile`.
    ///
    /// # Panics
    /// Panics if the tile is absent. Every `Board` holds all nine tiles, so
    /// reaching the panic means the bijection invariant was broken.
    pub fn position_of(&self, tile: Tile) -> Position {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &t) in row.iter().enumerate() {
                if t == tile {
                    return Position::new(r, c);
                }
            }
        }
        panic!("tile {tile:?} is missing from the board: {:?}", self.grid);
    }

    /// Returns the cell currently holding the blank.
    pub fn blank_position(&self) -> Position {
        self.position_of(Tile::Blank)
    }

    /// In-bounds neighbors of the blank, in successor emission order.
    fn blank_neighbors(&self) -> impl Iterator<Item = Position> {
        let blank = self.blank_position();
        SUCCESSOR_OFFSETS
            .into_iter()
            // Offsets that leave the board yield None and are dropped
            .filter_map(move |(d_row, d_col)| blank.offset(d_row, d_col))
    }

    /// Returns the tiles that can currently slide into the blank, in
    /// successor emission order.
    pub fn movable_tiles(&self) -> Vec<Tile> {
        self.blank_neighbors().map(|pos| self.tile_at(pos)).collect()
    }

    /// Returns every board reachable from this one with a single move.
    ///
    /// Successors are emitted in a fixed order, according to where the moved
    /// tile sits relative to the blank: left of it, above it, below it, right
    /// of it. Neighbors off the board are skipped, so a blank in a corner
    /// yields 2 boards, on an edge 3 and in the center 4.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// let solved = Board::solved(); // blank in the top-left corner
    /// assert_eq!(solved.possible_states().len(), 2);
    /// ```
    pub fn possible_states(&self) -> Vec<Board> {
        let blank = self.blank_position();
        // Each neighbor of the blank slides in, giving one successor
        self.blank_neighbors()
            .map(|pos| self.slid(pos, blank))
            .collect()
    }

    /// Returns a copy of the board with the tile at `from` moved into `blank`.
    fn slid(&self, from: Position, blank: Position) -> Board {
        let mut next = *self;
        next.grid[blank.row][blank.col] = self.grid[from.row][from.col];
        next.grid[from.row][from.col] = Tile::Blank;
        next
    }

    /// Checks whether `tile` may slide into the blank.
    ///
    /// # Returns
    /// The blank's position (the tile's destination) if `tile` is orthogonally
    /// adjacent to it, `None` otherwise. The blank itself never qualifies.
    pub fn check_move(&self, tile: Tile) -> Option<Position> {
        let pos = self.position_of(tile);
        let blank = self.blank_position();
        if pos.is_adjacent(blank) {
            Some(blank)
        } else {
            None
        }
    }

    /// Slides `tile` into the blank, in place.
    ///
    /// # Returns
    /// * `Ok(())` if the tile was adjacent to the blank; the two swap cells.
    /// * `Err(PuzzleError::InvalidMove)` otherwise; the board is unchanged.
    pub fn move_tile(&mut self, tile: Tile) -> Result<(), PuzzleError> {
        let blank = self
            .check_move(tile)
            .ok_or(PuzzleError::InvalidMove { tile })?;
        // Swap the tile with the blank
        let from = self.position_of(tile);
        *self = self.slid(from, blank);
        Ok(())
    }

    /// Returns the board that results from sliding `tile` into the blank,
    /// leaving `self` untouched.
    pub fn with_move(&self, tile: Tile) -> Result<Board, PuzzleError> {
        let mut next = *self;
        next.move_tile(tile)?;
        Ok(next)
    }

    /// True iff `tile` sits on its goal cell.
    pub fn is_on_goal(&self, tile: Tile) -> bool {
        let goal = tile.goal_position();
        self.tile_at(goal) == tile
    }

    /// True iff every tile sits on its goal cell.
    pub fn is_goal(&self) -> bool {
        Tile::ALL.iter().all(|&tile| self.is_on_goal(tile))
    }

    /// Manhattan distance from `tile`'s current cell to its goal cell.
    pub fn steps_to_target(&self, tile: Tile) -> u32 {
        self.position_of(tile)
            .manhattan_distance(tile.goal_position()) as u32
    }

    /// Heuristic h1: the number of tiles, blank included, that are not on
    /// their goal cell. Ranges over `0..=9`.
    pub fn h1(&self) -> u32 {
        Tile::ALL
            .iter()
            .filter(|&&tile| !self.is_on_goal(tile))
            .count() as u32
    }

    /// Heuristic h2: the sum over all tiles, blank included, of the Manhattan
    /// distance to the goal cell.
    pub fn h2(&self) -> u32 {
        Tile::ALL
            .iter()
            .map(|&tile| self.steps_to_target(tile))
            .sum()
    }

    /// Heuristic h3: `h1 + h2`.
    pub fn h3(&self) -> u32 {
        self.h1() + self.h2()
    }

    /// True iff the goal is reachable from this board.
    ///
    /// On a board of odd width a move never changes the parity of the number
    /// of inversions among the numbered tiles (read row-major, blank
    /// skipped). The goal has none, so exactly the boards with an even count
    /// are solvable.
    pub fn is_solvable(&self) -> bool {
        // Numbered tiles in row-major order, blank skipped
        let tiles: Vec<Tile> = self
            .grid
            .iter()
            .flatten()
            .copied()
            .filter(|&t| t != Tile::Blank)
            .collect();

        let mut inversions = 0;
        // Count every pair where a larger tile precedes a smaller one
        for (i, a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|&b| a > b).count();
        }
        inversions % 2 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::solved()
    }
}

impl fmt::Display for Board {
    /// Renders the board as a bordered 3x3 grid, blank shown as a space:
    ///
    /// ```text
    ///  ---------
    /// |    1  2 |
    /// | 3  4  5 |
    /// | 6  7  8 |
    ///  ---------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " --------- ")?;
        for row in &self.grid {
            write!(f, "|")?;
            for tile in row {
                write!(f, " {} ", tile)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, " --------- ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn board(rows: [&str; 3]) -> Board {
        board_from_str_array(&rows).unwrap()
    }

    #[test]
    fn test_tile_goal_positions() {
        assert_eq!(Tile::Blank.goal_position(), Position::new(0, 0));
        assert_eq!(Tile::One.goal_position(), Position::new(0, 1));
        assert_eq!(Tile::Three.goal_position(), Position::new(1, 0));
        assert_eq!(Tile::Eight.goal_position(), Position::new(2, 2));
    }

    #[test]
    fn test_tile_labels() {
        for tile in Tile::ALL.into_iter().skip(1) {
            assert_eq!(Tile::from_label(tile.to_char()), Some(tile));
        }
        assert_eq!(Tile::from_label('0'), None);
        assert_eq!(Tile::from_label('9'), None);
        assert_eq!(Tile::from_label(' '), None);
        assert_eq!(Tile::Blank.to_char(), ' ');
    }

    #[test]
    fn test_solved_board_is_goal() {
        let solved = Board::solved();
        assert!(solved.is_goal());
        assert_eq!(solved, board([".12", "345", "678"]));
        assert_eq!(solved.h1(), 0);
        assert_eq!(solved.h2(), 0);
        assert_eq!(solved.h3(), 0);
    }

    #[test]
    fn test_from_grid_rejects_duplicates() {
        let mut grid = *Board::solved().get_grid();
        grid[2][2] = Tile::One;
        assert_eq!(
            Board::from_grid(grid),
            Err(PuzzleError::DuplicateTile { tile: Tile::One })
        );
    }

    #[test]
    fn test_possible_states_count_by_blank_position() {
        // Corner, edge, center.
        assert_eq!(board([".12", "345", "678"]).possible_states().len(), 2);
        assert_eq!(board(["1.2", "345", "678"]).possible_states().len(), 3);
        assert_eq!(board(["123", "4.5", "678"]).possible_states().len(), 4);
        assert_eq!(board(["123", "456", "78."]).possible_states().len(), 2);
        assert_eq!(board(["123", "456", "7.8"]).possible_states().len(), 3);
    }

    #[test]
    fn test_possible_states_emission_order() {
        let b = board(["123", "4.5", "678"]);
        let expected = vec![
            board(["123", ".45", "678"]), // tile left of the blank
            board(["1.3", "425", "678"]), // tile above
            board(["123", "475", "6.8"]), // tile below
            board(["123", "45.", "678"]), // tile right
        ];
        assert_eq!(b.possible_states(), expected);
        assert_eq!(
            b.movable_tiles(),
            vec![Tile::Four, Tile::Two, Tile::Seven, Tile::Five]
        );
    }

    #[test]
    fn test_possible_states_single_adjacent_swap() {
        for seed in 0..20 {
            let b = Board::generate_with_seed(seed);
            let blank = b.blank_position();
            for next in b.possible_states() {
                let differing: Vec<Position> = (0..BOARD_SIZE)
                    .flat_map(|r| (0..BOARD_SIZE).map(move |c| Position::new(r, c)))
                    .filter(|&p| b.tile_at(p) != next.tile_at(p))
                    .collect();
                assert_eq!(differing.len(), 2, "a move changes exactly two cells");
                let new_blank = next.blank_position();
                assert!(new_blank.is_adjacent(blank));
                assert_eq!(next.tile_at(blank), b.tile_at(new_blank));
            }
        }
    }

    #[test]
    fn test_move_tile_valid() {
        let mut b = board(["123", "4.5", "678"]);
        assert!(b.move_tile(Tile::Seven).is_ok());
        assert_eq!(b, board(["123", "475", "6.8"]));
    }

    #[test]
    fn test_move_tile_not_adjacent() {
        let mut b = board(["123", "4.5", "678"]);
        let before = b;
        assert_eq!(
            b.move_tile(Tile::One),
            Err(PuzzleError::InvalidMove { tile: Tile::One })
        );
        assert_eq!(b, before, "a rejected move leaves the board unchanged");
    }

    #[test]
    fn test_move_blank_is_invalid() {
        let mut b = Board::solved();
        assert!(b.move_tile(Tile::Blank).is_err());
        assert_eq!(b.check_move(Tile::Blank), None);
    }

    #[test]
    fn test_with_move_leaves_original() {
        let b = Board::solved();
        let next = b.with_move(Tile::One).unwrap();
        assert_eq!(next, board(["1.2", "345", "678"]));
        assert!(b.is_goal());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = board(["123", "4.5", "678"]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.move_tile(Tile::Two).unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.get_tile(0, 1), Tile::Two);
        assert_eq!(original.get_tile(1, 1), Tile::Blank);
    }

    #[test]
    fn test_heuristics_one_move_from_goal() {
        let b = board(["1.2", "345", "678"]);
        assert!(!b.is_goal());
        assert_eq!(b.h1(), 2); // tile 1 and the blank
        assert_eq!(b.h2(), 2);
        assert_eq!(b.h3(), 4);
    }

    #[test]
    fn test_heuristics_on_scrambled_board() {
        let b = board(["283", "164", "7.5"]);
        assert_eq!(b.h1(), 9);
        assert_eq!(b.h2(), 18);
        assert_eq!(b.h3(), 27);
        assert_eq!(b.steps_to_target(Tile::Eight), 3);
        assert_eq!(b.steps_to_target(Tile::Blank), 3);
    }

    #[test]
    fn test_heuristics_zero_iff_goal() {
        for seed in 0..200 {
            let b = Board::generate_with_seed(seed);
            assert_eq!(b.h1() == 0, b.is_goal());
            assert_eq!(b.h2() == 0, b.is_goal());
            assert!(b.h2() >= b.h1());
            assert!(b.h1() <= 9);
        }
    }

    #[test]
    fn test_generate_is_permutation() {
        for seed in 0..50 {
            let b = Board::generate_with_seed(seed);
            assert_eq!(Board::from_grid(*b.get_grid()), Ok(b));
        }
        let b = Board::generate();
        assert_eq!(Board::from_grid(*b.get_grid()), Ok(b));
    }

    #[test]
    fn test_generate_with_seed_determinism() {
        assert_eq!(Board::generate_with_seed(42), Board::generate_with_seed(42));
        let distinct: std::collections::HashSet<Board> =
            (0..20).map(Board::generate_with_seed).collect();
        assert!(distinct.len() > 1, "different seeds should give different boards");
    }

    #[test]
    fn test_is_solvable() {
        assert!(Board::solved().is_solvable());
        assert!(board(["1.2", "345", "678"]).is_solvable());
        // Swapping two numbered tiles flips the parity.
        assert!(!board([".21", "345", "678"]).is_solvable());
        assert!(!board(["283", "164", "7.5"]).is_solvable());
    }

    #[test]
    fn test_solvability_preserved_by_moves() {
        for seed in 0..30 {
            let b = Board::generate_with_seed(seed);
            for next in b.possible_states() {
                assert_eq!(next.is_solvable(), b.is_solvable());
            }
        }
    }

    #[test]
    fn test_generate_solvable() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(Board::generate_solvable_with_rng(&mut rng).is_solvable());
        }
    }

    #[test]
    fn test_display_board_formatting() {
        let expected = " --------- \n|    1  2 |\n| 3  4  5 |\n| 6  7  8 |\n --------- ";
        assert_eq!(format!("{}", Board::solved()), expected);
    }
}

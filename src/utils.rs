use crate::engine::{Board, Tile, BOARD_SIZE};
use crate::error::PuzzleError;

/// Parses an array of row strings into a `Board`.
///
/// Exactly `BOARD_SIZE` rows of exactly `BOARD_SIZE` characters are expected,
/// starting from the top row. Valid characters are:
/// - `'1'` to `'8'`: the numbered tiles
/// - `'.'` or `'0'`: the blank
///
/// # Returns
/// * `Ok(Board)` if parsing succeeds and every tile appears exactly once.
/// * `Err(PuzzleError)` if the row count or a row length is wrong, a character
///   is unrecognized, or a tile is repeated.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::board_from_str_array;
/// use eight_puzzle::engine::Tile;
///
/// let board = board_from_str_array(&["283", "164", "7.5"]).unwrap();
/// assert_eq!(board.get_tile(0, 0), Tile::Two);
/// assert_eq!(board.get_tile(2, 1), Tile::Blank);
///
/// assert!(board_from_str_array(&["283", "164", "7x5"]).is_err());
/// assert!(board_from_str_array(&["283", "164"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PuzzleError> {
    if s.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidRowCount {
            expected: BOARD_SIZE,
            found: s.len(),
        });
    }

    let mut grid = [[Tile::Blank; BOARD_SIZE]; BOARD_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        let found = row_str.chars().count();
        if found != BOARD_SIZE {
            return Err(PuzzleError::InvalidRowLength {
                row: r,
                expected: BOARD_SIZE,
                found,
            });
        }

        for (c, ch) in row_str.chars().enumerate() {
            grid[r][c] = match ch {
                '.' | '0' => Tile::Blank,
                _ => Tile::from_label(ch).ok_or(PuzzleError::UnrecognizedCharacter {
                    character: ch,
                    row: r,
                    col: c,
                })?,
            };
        }
    }

    Board::from_grid(grid)
}

/// Parses a line of user input naming the tile to move.
///
/// Surrounding whitespace is ignored; what remains must be a single digit
/// from 1 to 8.
pub fn parse_tile_label(input: &str) -> Result<Tile, PuzzleError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let tile = match (chars.next(), chars.next()) {
        (Some(ch), None) => Tile::from_label(ch),
        _ => None,
    };
    tile.ok_or_else(|| PuzzleError::InvalidTileLabel {
        label: trimmed.to_string(),
    })
}

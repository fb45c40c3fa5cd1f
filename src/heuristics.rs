use crate::engine::Board;
use clap::ValueEnum;
use std::fmt;

/// Selects the estimate of remaining distance to the goal that orders greedy
/// search's frontier.
///
/// Each variant is a pure function of the board with a non-negative value
/// that is zero exactly at the goal. None of them makes greedy search
/// optimal; they only change which frontier board is taken next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Heuristic {
    /// h1: number of tiles off their goal cell.
    #[value(name = "h1")]
    Misplaced,
    /// h2: sum of Manhattan distances to the goal cells.
    #[value(name = "h2")]
    Manhattan,
    /// h3: h1 + h2.
    #[value(name = "h3")]
    Combined,
}

impl Heuristic {
    /// Evaluates the heuristic on `board`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// use eight_puzzle::heuristics::Heuristic;
    /// assert_eq!(Heuristic::Manhattan.evaluate(&Board::solved()), 0);
    /// ```
    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Misplaced => board.h1(),
            Heuristic::Manhattan => board.h2(),
            Heuristic::Combined => board.h3(),
        }
    }

    /// Short name used in CLI flags and benchmark output.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Misplaced => "h1",
            Heuristic::Manhattan => "h2",
            Heuristic::Combined => "h3",
        }
    }

    /// Returns the heuristic as a plain closure, the form greedy search takes.
    pub fn as_fn(self) -> impl Fn(&Board) -> u32 {
        move |board: &Board| self.evaluate(board)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

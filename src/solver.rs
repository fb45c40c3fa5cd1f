//! Search algorithms over the 8-puzzle state space.
//!
//! All three searches share one contract: starting from a board, take nodes
//! from a frontier until a goal board is taken or `max` boards have been
//! closed. Closing a board means it was taken, found not to be the goal,
//! recorded as visited and opened. A board whose value was already closed is
//! never opened again, even if it sits in a second node of the tree.

use crate::engine::Board;
use crate::heuristics::Heuristic;
use crate::tree::{NodeId, StateTree};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;

/// Default number of boards a search may close before giving up.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// A goal board reached by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Number of boards closed before the goal was taken from the frontier.
    pub steps: usize,
    /// Boards from the starting board to the goal, inclusive.
    pub path: Vec<Board>,
}

impl Solution {
    /// Number of moves along `path`.
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of one search run.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The goal, or `None` if the budget ran out (or the frontier emptied)
    /// first. `None` says nothing about whether the board is solvable.
    pub solution: Option<Solution>,
    /// Every closed board, in closing order. No board appears twice.
    pub closed: Vec<Board>,
    /// Number of nodes the search tree grew to.
    pub tree_size: usize,
}

impl SearchReport {
    /// The step at which the goal was reached, or `None` if it was not.
    pub fn steps(&self) -> Option<usize> {
        self.solution.as_ref().map(|s| s.steps)
    }

    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }
}

/// Bookkeeping shared by the three searches: the tree being grown, the
/// value-keyed visited set and the closing order.
struct Search {
    tree: StateTree,
    visited: HashSet<Board>,
    closed: Vec<Board>,
    max: usize,
}

impl Search {
    fn new(board: &Board, max: usize) -> Self {
        Search {
            tree: StateTree::of(*board),
            visited: HashSet::new(),
            closed: Vec::new(),
            max,
        }
    }

    // Checked before every take, goal test included
    fn has_budget(&self) -> bool {
        self.closed.len() < self.max
    }

    fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(self.tree.board(id))
    }

    fn is_goal(&self, id: NodeId) -> bool {
        self.tree.board(id).is_goal()
    }

    fn close(&mut self, id: NodeId) {
        let board = *self.tree.board(id);
        self.visited.insert(board);
        self.closed.push(board);
    }

    /// Opens `id` and returns the children whose boards are not visited, in
    /// emission order.
    fn unvisited_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = self.tree.open_state(id).to_vec();
        children
            .into_iter()
            .filter(|&child| !self.is_visited(child))
            .collect()
    }

    fn found(self, id: NodeId) -> SearchReport {
        let solution = Solution {
            steps: self.closed.len(),
            path: self.tree.path_to(id),
        };
        SearchReport {
            solution: Some(solution),
            tree_size: self.tree.node_count(),
            closed: self.closed,
        }
    }

    fn exhausted(self) -> SearchReport {
        SearchReport {
            solution: None,
            tree_size: self.tree.node_count(),
            closed: self.closed,
        }
    }
}

/// Depth-first search with a stack frontier.
///
/// Children are pushed in emission order, so the last emitted child is taken
/// first.
///
/// # Arguments
/// * `board`: The starting board. It is copied; the caller's board is untouched.
/// * `max`: Maximum number of boards to close.
pub fn depth_first(board: &Board, max: usize) -> SearchReport {
    let mut search = Search::new(board, max);
    let mut stack = vec![search.tree.root()];

    while search.has_budget() {
        let Some(id) = stack.pop() else { break };
        // Pushed before its board was closed elsewhere; skipping costs nothing
        if search.is_visited(id) {
            continue;
        }
        if search.is_goal(id) {
            return search.found(id);
        }
        search.close(id);
        // Last emitted child ends on top of the stack
        stack.extend(search.unvisited_children(id));
    }
    search.exhausted()
}

/// Breadth-first search with a FIFO frontier.
///
/// A dequeued node is opened and its unvisited children enqueued before the
/// node itself is tested for the goal. The order does not change the
/// returned step.
///
/// # Examples
/// ```
/// use eight_puzzle::solver::breadth_first;
/// use eight_puzzle::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1.2", "345", "678"]).unwrap();
/// let report = breadth_first(&board, 100);
/// assert_eq!(report.steps(), Some(1));
/// assert_eq!(report.solution.unwrap().move_count(), 1);
/// ```
pub fn breadth_first(board: &Board, max: usize) -> SearchReport {
    let mut search = Search::new(board, max);
    let mut queue = VecDeque::from([search.tree.root()]);

    while search.has_budget() {
        let Some(id) = queue.pop_front() else { break };
        if search.is_visited(id) {
            continue;
        }
        // Open before the goal test; the goal node grows children too
        queue.extend(search.unvisited_children(id));
        if search.is_goal(id) {
            return search.found(id);
        }
        search.close(id);
    }
    search.exhausted()
}

/// Greedy best-first search ordered by `heuristic`.
///
/// The open set holds every discovered, unclosed node keyed by the heuristic
/// value of its board. Each step takes the entry with the lowest value; ties
/// go to the node discovered first (lowest `NodeId`).
///
/// # Arguments
/// * `board`: The starting board.
/// * `max`: Maximum number of boards to close.
/// * `heuristic`: Pure estimate of distance to the goal, evaluated once per
///   discovered node.
pub fn greedy<H>(board: &Board, max: usize, heuristic: H) -> SearchReport
where
    H: Fn(&Board) -> u32,
{
    let mut search = Search::new(board, max);
    let root = search.tree.root();
    // Min-heap on (heuristic, id): ids grow in discovery order, so ties are FIFO
    let mut open = BinaryHeap::new();
    open.push(Reverse((heuristic(search.tree.board(root)), root)));

    while search.has_budget() {
        let Some(Reverse((_, id))) = open.pop() else { break };
        if search.is_visited(id) {
            continue;
        }
        if search.is_goal(id) {
            return search.found(id);
        }
        search.close(id);
        for child in search.unvisited_children(id) {
            open.push(Reverse((heuristic(search.tree.board(child)), child)));
        }
    }
    search.exhausted()
}

/// A search strategy, as selected by the binaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    Greedy(Heuristic),
}

impl Algorithm {
    /// The strategies compared by the benchmark, in output order.
    pub fn benchmark_suite() -> [Algorithm; 4] {
        [
            Algorithm::DepthFirst,
            Algorithm::BreadthFirst,
            Algorithm::Greedy(Heuristic::Misplaced),
            Algorithm::Greedy(Heuristic::Manhattan),
        ]
    }

    /// Label used in benchmark output.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "depth",
            Algorithm::BreadthFirst => "breadth",
            Algorithm::Greedy(heuristic) => heuristic.name(),
        }
    }

    pub fn run(self, board: &Board, max: usize) -> SearchReport {
        match self {
            Algorithm::DepthFirst => depth_first(board, max),
            Algorithm::BreadthFirst => breadth_first(board, max),
            Algorithm::Greedy(heuristic) => greedy(board, max, heuristic.as_fn()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

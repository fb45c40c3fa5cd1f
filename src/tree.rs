//! Lazily expanded tree of board snapshots.
//!
//! Nodes live in an arena and are addressed by `NodeId`. A node's children
//! are materialized the first time the node is opened; opening it again
//! returns the same children. Node identity (the id) is distinct from board
//! identity: the same configuration reached along two paths occupies two
//! nodes. Searches keep their own value-keyed visited sets for that reason.

use crate::engine::Board;

/// Index of a node in its `StateTree`.
pub type NodeId = usize;

#[derive(Clone, Debug)]
struct Node {
    board: Board,
    parent: Option<NodeId>,
    // None until the node is opened.
    children: Option<Vec<NodeId>>,
}

/// A tree of boards rooted at a single configuration, grown on demand.
///
/// Each tree exclusively owns its nodes; nothing is shared between trees.
/// Ids are handed out in creation order, so a smaller id always means the
/// node was created earlier.
#[derive(Clone, Debug)]
pub struct StateTree {
    nodes: Vec<Node>,
}

impl StateTree {
    /// Creates a tree whose root wraps `board`, with no parent and no
    /// children yet.
    pub fn of(board: Board) -> Self {
        StateTree {
            nodes: vec![Node {
                board,
                parent: None,
                children: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    /// Number of nodes created so far. Never zero: the root always exists.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the board wrapped by node `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id].board
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Returns the node's children, or `None` if it has not been opened.
    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes[id].children.as_deref()
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.nodes[id].children.is_some()
    }

    /// Opens node `id`: creates one child per board from
    /// [`Board::possible_states`], in emission order, and returns their ids.
    ///
    /// Children are created only on the first call; later calls return the
    /// same ids without growing the tree.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// use eight_puzzle::tree::StateTree;
    ///
    /// let mut tree = StateTree::of(Board::solved());
    /// let root = tree.root();
    /// let first = tree.open_state(root).to_vec();
    /// assert_eq!(first.len(), 2);
    /// assert_eq!(tree.open_state(root), &first[..]);
    /// assert_eq!(tree.node_count(), 3);
    /// ```
    pub fn open_state(&mut self, id: NodeId) -> &[NodeId] {
        if self.nodes[id].children.is_none() {
            let successors = self.nodes[id].board.possible_states();
            let mut children = Vec::with_capacity(successors.len());
            for board in successors {
                children.push(self.nodes.len());
                self.nodes.push(Node {
                    board,
                    parent: Some(id),
                    children: None,
                });
            }
            self.nodes[id].children = Some(children);
        }
        self.nodes[id].children.as_deref().unwrap_or_default()
    }

    /// Returns the boards on the path from the root down to node `id`,
    /// root first.
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(self.nodes[node_id].board);
            current = self.nodes[node_id].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_of_creates_unopened_root() {
        let board = board_from_str_array(&["123", "4.5", "678"]).unwrap();
        let tree = StateTree::of(board);
        let root = tree.root();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.board(root), &board);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.children(root), None);
        assert!(!tree.is_open(root));
    }

    #[test]
    fn test_open_state_follows_emission_order() {
        let board = board_from_str_array(&["123", "4.5", "678"]).unwrap();
        let mut tree = StateTree::of(board);
        let root = tree.root();
        let children = tree.open_state(root).to_vec();

        let boards: Vec<Board> = children.iter().map(|&id| *tree.board(id)).collect();
        assert_eq!(boards, board.possible_states());
        for &child in &children {
            assert_eq!(tree.parent(child), Some(root));
            assert!(!tree.is_open(child));
        }
    }

    #[test]
    fn test_open_state_is_idempotent() {
        let mut tree = StateTree::of(Board::solved());
        let root = tree.root();
        let first = tree.open_state(root).to_vec();
        let second = tree.open_state(root).to_vec();
        assert_eq!(first, second);
        assert_eq!(tree.node_count(), 1 + first.len());
        assert_eq!(tree.children(root), Some(&first[..]));
    }

    #[test]
    fn test_same_board_in_two_nodes() {
        // Opening a child yields the root's board again as a grandchild.
        let root_board = Board::solved();
        let mut tree = StateTree::of(root_board);
        let child = tree.open_state(tree.root())[0];
        let grandchildren = tree.open_state(child).to_vec();
        let back = grandchildren
            .iter()
            .copied()
            .find(|&id| *tree.board(id) == root_board)
            .expect("moving the tile back restores the root board");
        assert_ne!(back, tree.root());
    }

    #[test]
    fn test_path_to() {
        let mut tree = StateTree::of(Board::solved());
        let root = tree.root();
        let child = tree.open_state(root)[1];
        let grandchild = tree.open_state(child)[0];

        let path = tree.path_to(grandchild);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], *tree.board(root));
        assert_eq!(path[1], *tree.board(child));
        assert_eq!(path[2], *tree.board(grandchild));
        assert_eq!(tree.path_to(root), vec![Board::solved()]);
    }
}

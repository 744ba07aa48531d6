use crate::error::TreeError;

use super::path::{NodeId, TreePath};

/// A position in the move tree
///
/// The root has no id and no move. A `disabled` node is part of the tree but
/// must not be used as a landing point by navigation (e.g. puzzle solution
/// moves not yet revealed).
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: Option<NodeId>,
    pub ply: usize,
    pub uci: Option<String>,
    pub san: Option<String>,
    pub fen: String,
    pub disabled: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a root node for a starting position
    pub fn root(fen: impl Into<String>) -> Self {
        Self {
            id: None,
            ply: 0,
            uci: None,
            san: None,
            fen: fen.into(),
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Create a node reached by playing `uci`
    pub fn from_move(
        ply: usize,
        uci: impl Into<String>,
        san: impl Into<String>,
        fen: impl Into<String>,
    ) -> Result<Self, TreeError> {
        let uci = uci.into();
        let id = NodeId::from_uci(&uci)?;
        Ok(Self {
            id: Some(id),
            ply,
            uci: Some(uci),
            san: Some(san.into()),
            fen: fen.into(),
            disabled: false,
            children: Vec::new(),
        })
    }

    pub fn first_child(&self) -> Option<&TreeNode> {
        self.children.first()
    }

    pub fn child_by_id(&self, id: NodeId) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.id == Some(id))
    }

    /// Node located by `path`, relative to this node
    pub fn node_at_path(&self, path: &TreePath) -> Option<&TreeNode> {
        path.ids()
            .iter()
            .try_fold(self, |node, id| node.child_by_id(*id))
    }

    pub fn node_at_path_mut(&mut self, path: &TreePath) -> Option<&mut TreeNode> {
        let mut node = self;
        for id in path.ids() {
            node = node.children.iter_mut().find(|c| c.id == Some(*id))?;
        }
        Some(node)
    }

    /// This node followed by first children down to a leaf
    pub fn mainline(&self) -> Vec<&TreeNode> {
        let mut nodes = vec![self];
        let mut node = self;
        while let Some(child) = node.first_child() {
            nodes.push(child);
            node = child;
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn line(moves: &[&str]) -> TreeNode {
        let mut root = TreeNode::root(START);
        let mut nodes: Vec<TreeNode> = moves
            .iter()
            .enumerate()
            .map(|(i, uci)| TreeNode::from_move(i + 1, *uci, *uci, "").unwrap())
            .collect();
        while let Some(mut node) = nodes.pop() {
            if let Some(next) = root.children.pop() {
                node.children.push(next);
            }
            root.children.push(node);
        }
        root
    }

    fn path(moves: &[&str]) -> TreePath {
        moves.iter().map(|m| NodeId::from_uci(m).unwrap()).collect()
    }

    #[test]
    fn test_mainline_walks_first_children() {
        let mut root = line(&["e2e4", "e7e5", "g1f3"]);
        // Variation after 1. e4
        let variation = TreeNode::from_move(2, "c7c5", "c5", "").unwrap();
        root.children[0].children.push(variation);

        let mainline = root.mainline();
        assert_eq!(mainline.len(), 4);
        assert_eq!(mainline[2].uci.as_deref(), Some("e7e5"));
        assert_eq!(TreePath::from_node_list(&mainline), path(&["e2e4", "e7e5", "g1f3"]));
    }

    #[test]
    fn test_node_at_path() {
        let root = line(&["e2e4", "e7e5"]);

        assert_eq!(root.node_at_path(&TreePath::root()), Some(&root));
        let node = root.node_at_path(&path(&["e2e4", "e7e5"])).unwrap();
        assert_eq!(node.ply, 2);
        assert!(root.node_at_path(&path(&["d2d4"])).is_none());
    }

    #[test]
    fn test_node_at_path_mut() {
        let mut root = line(&["e2e4", "e7e5"]);
        root.node_at_path_mut(&path(&["e2e4", "e7e5"])).unwrap().disabled = true;

        assert!(root.node_at_path(&path(&["e2e4", "e7e5"])).unwrap().disabled);
        assert!(!root.node_at_path(&path(&["e2e4"])).unwrap().disabled);
    }

    #[test]
    fn test_from_move_rejects_bad_uci() {
        assert!(TreeNode::from_move(1, "e2", "e2", "").is_err());
    }
}

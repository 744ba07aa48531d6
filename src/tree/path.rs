//! Paths into the move tree
//!
//! A path is the sequence of node ids from the root to a node. The root path
//! is empty. Paths are immutable values: every operation returns a new path,
//! and taking a parent shares the backing slice instead of copying it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::TreeError;

use super::node::TreeNode;

/// Offset of the first id character, keeps ids printable
const CHAR_OFFSET: u32 = 35;

/// Promotion roles in encoding order
const PROMOTION_ROLES: [char; 5] = ['q', 'r', 'b', 'n', 'k'];

/// Two-character identifier of a node among its siblings
///
/// Derived from the move that leads to the node using the scalachess char
/// pair encoding, so the same move always yields the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId([char; 2]);

impl NodeId {
    pub fn new(a: char, b: char) -> Self {
        Self([a, b])
    }

    /// Encode a UCI move (`e2e4`, `e7e8q`)
    pub fn from_uci(uci: &str) -> Result<Self, TreeError> {
        let invalid = || TreeError::InvalidUci(uci.to_string());
        let bytes = uci.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(invalid());
        }

        let from = square_index(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let to = square_index(bytes[2], bytes[3]).ok_or_else(invalid)?;

        let second = match bytes.get(4) {
            None => CHAR_OFFSET + to,
            Some(&role) => {
                let role_index = PROMOTION_ROLES
                    .iter()
                    .position(|&r| r == role as char)
                    .ok_or_else(invalid)? as u32;
                CHAR_OFFSET + 64 + 8 * role_index + (to % 8)
            }
        };

        Ok(Self([code_char(CHAR_OFFSET + from), code_char(second)]))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Square index (a1 = 0, h8 = 63) from file and rank bytes
fn square_index(file: u8, rank: u8) -> Option<u32> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some((file - b'a') as u32 + 8 * (rank - b'1') as u32)
}

fn code_char(code: u32) -> char {
    // All codes stay below 256
    char::from(code as u8)
}

/// Location of a node in the move tree
#[derive(Clone)]
pub struct TreePath {
    ids: Arc<[NodeId]>,
    len: usize,
}

impl TreePath {
    /// The empty path, locating the root
    pub fn root() -> Self {
        Self {
            ids: Arc::from(Vec::new()),
            len: 0,
        }
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_root(&self) -> bool {
        self.len == 0
    }

    /// Path to a child of the located node
    pub fn child(&self, id: NodeId) -> Self {
        let mut ids = self.ids().to_vec();
        ids.push(id);
        let len = ids.len();
        Self {
            ids: Arc::from(ids),
            len,
        }
    }

    /// Path to the parent; the root is its own parent
    pub fn init(&self) -> Self {
        self.truncate(self.len.saturating_sub(1))
    }

    /// Keep the first `len` ids
    pub fn truncate(&self, len: usize) -> Self {
        Self {
            ids: Arc::clone(&self.ids),
            len: len.min(self.len),
        }
    }

    /// Whether `other` is a prefix of this path (every path contains root)
    pub fn contains(&self, other: &TreePath) -> bool {
        self.ids().starts_with(other.ids())
    }

    /// Build a path from a list of nodes starting at the root
    ///
    /// The root carries no id and contributes nothing.
    pub fn from_node_list(nodes: &[&TreeNode]) -> Self {
        nodes.iter().filter_map(|n| n.id).collect()
    }
}

impl Default for TreePath {
    fn default() -> Self {
        Self::root()
    }
}

impl FromIterator<NodeId> for TreePath {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let ids: Vec<NodeId> = iter.into_iter().collect();
        let len = ids.len();
        Self {
            ids: Arc::from(ids),
            len,
        }
    }
}

impl PartialEq for TreePath {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for TreePath {}

impl Hash for TreePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.ids() {
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreePath({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(uci: &str) -> NodeId {
        NodeId::from_uci(uci).unwrap()
    }

    #[test]
    fn test_node_id_plain_move() {
        // e2 = 12, e4 = 28
        assert_eq!(id("e2e4"), NodeId::new(char::from(47u8), char::from(63u8)));
        assert_eq!(id("a1h8").to_string(), "#b");
    }

    #[test]
    fn test_node_id_promotion() {
        // e7 = 52, queen index 0, file e = 4
        assert_eq!(id("e7e8q"), NodeId::new(char::from(87u8), char::from(103u8)));
        // knight index 3
        assert_eq!(id("a7a8n"), NodeId::new(char::from(83u8), char::from(123u8)));
    }

    #[test]
    fn test_node_id_invalid() {
        assert!(NodeId::from_uci("e2").is_err());
        assert!(NodeId::from_uci("i2e4").is_err());
        assert!(NodeId::from_uci("e2e9").is_err());
        assert!(NodeId::from_uci("e7e8x").is_err());
        assert_eq!(
            NodeId::from_uci("zz"),
            Err(TreeError::InvalidUci("zz".to_string()))
        );
    }

    #[test]
    fn test_root_path() {
        let root = TreePath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
        assert_eq!(root.init(), root);
    }

    #[test]
    fn test_child_and_init() {
        let p = TreePath::root().child(id("e2e4")).child(id("e7e5"));
        assert_eq!(p.len(), 2);
        assert_eq!(p.init(), TreePath::root().child(id("e2e4")));
        assert_eq!(p.init().init(), TreePath::root());
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = TreePath::root().child(id("e2e4"));
        let a = parent.child(id("e7e5"));
        let b = parent.child(id("c7c5"));

        assert_eq!(parent.len(), 1);
        assert_ne!(a, b);
        assert!(a.contains(&parent));
        assert!(b.contains(&parent));
    }

    #[test]
    fn test_truncated_path_extends_independently() {
        let long = TreePath::root().child(id("e2e4")).child(id("e7e5"));
        let branched = long.init().child(id("c7c5"));

        assert_eq!(long.to_string(), format!("{}{}", id("e2e4"), id("e7e5")));
        assert_eq!(branched.to_string(), format!("{}{}", id("e2e4"), id("c7c5")));
    }

    #[test]
    fn test_contains() {
        let a = TreePath::root().child(id("e2e4"));
        let ab = a.child(id("e7e5"));

        assert!(ab.contains(&a));
        assert!(ab.contains(&ab));
        assert!(ab.contains(&TreePath::root()));
        assert!(!a.contains(&ab));
        assert!(!TreePath::root().contains(&a));
    }

    #[test]
    fn test_string_form_matches_concatenation() {
        let p: TreePath = [id("e2e4"), id("e7e5")].into_iter().collect();
        assert_eq!(p.to_string(), format!("{}{}", id("e2e4"), id("e7e5")));
    }
}

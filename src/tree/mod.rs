//! Move tree: nodes and the paths that locate them

pub mod node;
pub mod path;

pub use node::TreeNode;
pub use path::{NodeId, TreePath};

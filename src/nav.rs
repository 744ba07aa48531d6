//! Keyboard navigation through the move tree
//!
//! Each operation computes a target path from a [`NavState`] snapshot and
//! hands it to the controller's `user_jump`. The `*_path` functions expose the
//! same computation without dispatching, for hosts that route jumps themselves.
//!
//! `first` and `last` toggle: from anywhere past the initial position `first`
//! goes back to it, and pressed again goes to the root. `last` from before the
//! initial position goes to it, and pressed again goes to the end of the
//! mainline, stopping before any disabled tail.

use tracing::{debug, warn};

use crate::tree::{TreeNode, TreePath};

/// Read-only view of the navigation state
#[derive(Debug, Clone)]
pub struct NavState<'a> {
    /// Node located by `path`
    pub node: &'a TreeNode,
    pub path: &'a TreePath,
    /// Designated starting point (e.g. where a puzzle begins)
    pub initial_path: &'a TreePath,
    /// Root followed by the mainline nodes
    pub mainline: Vec<&'a TreeNode>,
}

/// Controller driven by the navigation keys
pub trait KeyboardController {
    fn nav_state(&self) -> NavState<'_>;

    fn user_jump(&mut self, path: TreePath);
}

pub fn can_go_forward(state: &NavState<'_>) -> bool {
    !state.node.children.is_empty()
}

/// Path of the first child, unless there is none or it is disabled
pub fn next_path(state: &NavState<'_>) -> Option<TreePath> {
    let child = state.node.first_child()?;
    if child.disabled {
        return None;
    }
    child.id.map(|id| state.path.child(id))
}

pub fn prev_path(state: &NavState<'_>) -> TreePath {
    state.path.init()
}

pub fn last_path(state: &NavState<'_>) -> TreePath {
    if !state.path.contains(state.initial_path) {
        return state.initial_path.clone();
    }
    enabled_mainline_path(&state.mainline)
}

pub fn first_path(state: &NavState<'_>) -> TreePath {
    let to_initial = state.path != state.initial_path && state.path.contains(state.initial_path);
    if to_initial {
        state.initial_path.clone()
    } else {
        TreePath::root()
    }
}

/// Mainline path truncated after its last enabled node
///
/// The root is always a valid landing point, so a mainline that is empty or
/// disabled past the root resolves to the root.
fn enabled_mainline_path(mainline: &[&TreeNode]) -> TreePath {
    match mainline.iter().rposition(|n| !n.disabled) {
        Some(last) => TreePath::from_node_list(&mainline[..=last]),
        None => {
            warn!("NAV: mainline has no enabled node, falling back to root");
            TreePath::root()
        }
    }
}

pub fn next<C: KeyboardController>(ctrl: &mut C) {
    let target = {
        let state = ctrl.nav_state();
        if !can_go_forward(&state) {
            debug!("NAV: next ignored, end of line");
            return;
        }
        next_path(&state)
    };
    match target {
        Some(path) => jump(ctrl, path),
        None => debug!("NAV: next ignored, child not revealed"),
    }
}

pub fn prev<C: KeyboardController>(ctrl: &mut C) {
    let target = prev_path(&ctrl.nav_state());
    jump(ctrl, target);
}

pub fn last<C: KeyboardController>(ctrl: &mut C) {
    let target = last_path(&ctrl.nav_state());
    jump(ctrl, target);
}

pub fn first<C: KeyboardController>(ctrl: &mut C) {
    let target = first_path(&ctrl.nav_state());
    jump(ctrl, target);
}

fn jump<C: KeyboardController>(ctrl: &mut C, path: TreePath) {
    debug!("NAV: jump to {:?}", path);
    ctrl.user_jump(path);
}

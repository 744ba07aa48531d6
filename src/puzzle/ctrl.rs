//! Puzzle controller
//!
//! Owns the move tree and the view-model of the puzzle being solved. Views
//! never see the controller; they get [`FeedbackProps`] / [`AfterProps`]
//! snapshots and callbacks that the host routes back here.

use tracing::{debug, info, warn};

use crate::error::PuzzleError;
use crate::nav::{KeyboardController, NavState};
use crate::tree::{TreeNode, TreePath};
use crate::types::Color;

use super::after::AfterProps;
use super::feedback::FeedbackProps;
use super::model::{Feedback, Outcome, Puzzle, ViewMode};

/// View-model of the puzzle page
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleVm {
    /// Node currently shown
    pub path: TreePath,
    /// Node where solving starts
    pub initial_path: TreePath,
    pub mode: ViewMode,
    pub last_feedback: Feedback,
    pub pov: Color,
    pub can_view_solution: bool,
    pub result: Option<Outcome>,
}

pub struct PuzzleCtrl {
    puzzle: Puzzle,
    tree: TreeNode,
    vm: PuzzleVm,
    /// Solution moves revealed so far
    revealed: usize,
    mistakes: u32,
    assisted: bool,
}

impl PuzzleCtrl {
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        let tree = puzzle.build_tree()?;
        let initial_path = TreePath::from_node_list(&tree.mainline()[..=puzzle.initial_ply]);
        let vm = PuzzleVm {
            path: initial_path.clone(),
            initial_path,
            mode: ViewMode::Play,
            last_feedback: Feedback::Init,
            pov: puzzle.pov(),
            can_view_solution: false,
            result: None,
        };
        debug!("PUZZLE: loaded {} (pov {})", puzzle.id, vm.pov);

        Ok(Self {
            puzzle,
            tree,
            vm,
            revealed: 0,
            mistakes: 0,
            assisted: false,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn vm(&self) -> &PuzzleVm {
        &self.vm
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    /// Node currently shown
    pub fn node(&self) -> &TreeNode {
        self.tree.node_at_path(&self.vm.path).unwrap_or(&self.tree)
    }

    pub fn feedback_props(&self) -> FeedbackProps {
        FeedbackProps {
            mode: self.vm.mode,
            last_feedback: self.vm.last_feedback,
            pov: self.vm.pov,
            can_view_solution: self.vm.can_view_solution,
        }
    }

    pub fn after_props(&self) -> AfterProps {
        AfterProps {
            puzzle_id: self.puzzle.id.clone(),
            rating: self.puzzle.rating,
            result: self.vm.result,
        }
    }

    /// Whether the shown node is the last revealed one
    pub fn at_frontier(&self) -> bool {
        self.vm.path == self.frontier()
    }

    /// Play a move for the solver
    ///
    /// Only played in play mode with the last revealed node shown. Otherwise
    /// the move is ignored and the current feedback returned unchanged.
    pub fn user_move(&mut self, uci: &str) -> Feedback {
        if self.vm.mode == ViewMode::View {
            debug!("PUZZLE: move {} ignored, puzzle is over", uci);
            return self.vm.last_feedback;
        }
        if !self.at_frontier() {
            debug!("PUZZLE: move {} ignored, not at the solution frontier", uci);
            return self.vm.last_feedback;
        }

        let uci = uci.trim().to_lowercase();
        let expected = &self.puzzle.solution()[self.revealed];
        if uci == expected.uci {
            debug!("PUZZLE: {} is correct", uci);
            self.advance();
        } else {
            debug!("PUZZLE: {} is wrong, expected {}", uci, expected.uci);
            self.mistakes += 1;
            self.vm.last_feedback = Feedback::Fail;
            self.vm.can_view_solution = true;
            self.vm.path = self.frontier();
        }
        self.vm.last_feedback
    }

    /// Play the next solution move on the solver's behalf
    pub fn solve(&mut self) {
        if self.vm.mode == ViewMode::View {
            debug!("PUZZLE: solve ignored, puzzle is over");
            return;
        }
        self.assisted = true;
        self.advance();
    }

    /// Reveal the whole solution and end the puzzle
    ///
    /// Only allowed once the view-model offers it.
    pub fn view_solution(&mut self) {
        if !self.vm.can_view_solution || self.vm.mode == ViewMode::View {
            debug!("PUZZLE: view solution not available");
            return;
        }
        while !self.is_complete() {
            self.reveal_next();
        }
        self.assisted = true;
        self.finish();
        self.vm.path = self.frontier();
    }

    /// Reveal the solver's move and the scripted reply
    fn advance(&mut self) {
        self.reveal_next();
        if !self.is_complete() {
            self.reveal_next();
        }

        if self.is_complete() {
            self.finish();
        } else {
            self.vm.last_feedback = Feedback::Good;
        }
        self.vm.path = self.frontier();
    }

    fn reveal_next(&mut self) {
        self.revealed += 1;
        let path = self.frontier();
        if let Some(node) = self.tree.node_at_path_mut(&path) {
            node.disabled = false;
        }
    }

    fn is_complete(&self) -> bool {
        self.revealed >= self.puzzle.solution().len()
    }

    fn finish(&mut self) {
        let outcome = if self.mistakes == 0 && !self.assisted {
            Outcome::Solved
        } else {
            Outcome::Failed
        };
        info!("PUZZLE: {} finished: {:?}", self.puzzle.id, outcome);
        self.vm.mode = ViewMode::View;
        self.vm.last_feedback = Feedback::Win;
        self.vm.result = Some(outcome);
    }

    /// Path of the last revealed node
    fn frontier(&self) -> TreePath {
        let mainline = self.tree.mainline();
        let end = (self.puzzle.initial_ply + self.revealed).min(mainline.len() - 1);
        TreePath::from_node_list(&mainline[..=end])
    }
}

impl KeyboardController for PuzzleCtrl {
    fn nav_state(&self) -> NavState<'_> {
        NavState {
            node: self.node(),
            path: &self.vm.path,
            initial_path: &self.vm.initial_path,
            mainline: self.tree.mainline(),
        }
    }

    fn user_jump(&mut self, path: TreePath) {
        if self.tree.node_at_path(&path).is_none() {
            warn!("PUZZLE: jump to unknown path {:?} ignored", path);
            return;
        }
        self.vm.path = path;
    }
}

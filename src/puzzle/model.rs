use serde::Deserialize;

use crate::error::PuzzleError;
use crate::tree::TreeNode;
use crate::types::Color;

/// A move of the puzzle's game line
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PuzzleMove {
    pub uci: String,
    pub san: String,
    /// Position after the move
    pub fen: String,
}

/// A puzzle: a game line and the ply where solving starts
///
/// Moves after `initial_ply` are the solution, alternating between the
/// solver's moves and the scripted replies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub rating: u32,
    #[serde(default)]
    pub themes: Vec<String>,
    /// Position before the first move
    pub fen: String,
    pub moves: Vec<PuzzleMove>,
    pub initial_ply: usize,
}

impl Puzzle {
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.initial_ply > self.moves.len() {
            return Err(PuzzleError::InitialPlyOutOfRange {
                id: self.id.clone(),
                initial_ply: self.initial_ply,
                moves: self.moves.len(),
            });
        }
        if self.initial_ply == self.moves.len() {
            return Err(PuzzleError::NoSolution {
                id: self.id.clone(),
                initial_ply: self.initial_ply,
            });
        }
        Ok(())
    }

    pub fn solution(&self) -> &[PuzzleMove] {
        &self.moves[self.initial_ply.min(self.moves.len())..]
    }

    /// Side the solver plays: the side to move where solving starts
    pub fn pov(&self) -> Color {
        let fen = match self.initial_ply {
            0 => &self.fen,
            ply => self.moves.get(ply - 1).map(|m| &m.fen).unwrap_or(&self.fen),
        };
        Color::to_move_in_fen(fen)
    }

    /// Build the move tree of the game line
    ///
    /// Solution nodes start disabled and are enabled as they are revealed.
    pub fn build_tree(&self) -> Result<TreeNode, PuzzleError> {
        self.validate()?;

        let mut child: Option<TreeNode> = None;
        for (i, mv) in self.moves.iter().enumerate().rev() {
            let ply = i + 1;
            let mut node = TreeNode::from_move(ply, &mv.uci, &mv.san, &mv.fen)?;
            node.disabled = ply > self.initial_ply;
            node.children.extend(child.take());
            child = Some(node);
        }

        let mut root = TreeNode::root(&self.fen);
        root.children.extend(child);
        Ok(root)
    }
}

/// Display mode of the puzzle page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Solving
    #[default]
    Play,
    /// Solved or given up, the after view is shown
    View,
}

/// Reaction to the solver's last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// No move played yet
    #[default]
    Init,
    Good,
    Fail,
    /// Last solution move played
    Win,
}

/// How a finished puzzle went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every move found without mistakes or help
    Solved,
    Failed,
}

/// Puzzles to train on, cycled in order
#[derive(Debug, Clone)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
    current: usize,
}

impl PuzzleSet {
    /// Build a set, rejecting an empty list or an invalid puzzle
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, PuzzleError> {
        if puzzles.is_empty() {
            return Err(PuzzleError::EmptySet);
        }
        for puzzle in &puzzles {
            puzzle.validate()?;
        }
        Ok(Self {
            puzzles,
            current: 0,
        })
    }

    pub fn current(&self) -> &Puzzle {
        &self.puzzles[self.current]
    }

    /// Move to the next puzzle, wrapping around at the end
    pub fn advance(&mut self) -> &Puzzle {
        self.current = (self.current + 1) % self.puzzles.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

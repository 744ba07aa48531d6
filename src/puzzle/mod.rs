//! Puzzle solving: data model, controller and views

pub mod after;
pub mod ctrl;
pub mod feedback;
pub mod model;

pub use after::AfterProps;
pub use ctrl::{PuzzleCtrl, PuzzleVm};
pub use feedback::{FeedbackProps, PuzzleActions};
pub use model::{Feedback, Outcome, Puzzle, PuzzleMove, PuzzleSet, ViewMode};

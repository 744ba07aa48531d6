use crate::insight::Answer;
use crate::puzzle::PuzzleSet;

use super::state::Screen;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Click handlers wired into the element tree
/// - Effects (async data loading)
#[derive(Debug)]
pub enum Action {
    // Move tree navigation
    NavFirst,
    NavPrev,
    NavNext,
    NavLast,

    /// Activate the shown button carrying this class in the last built tree
    ActivateButton(&'static str),

    // Dispatched by button handlers
    Solve,
    ViewSolution,
    NextPuzzle,

    // Move input
    InputChar(char),
    InputBackspace,
    SubmitMove,

    SwitchScreen(Screen),
    ToggleScreen,

    // Data actions
    RefreshData,
    PuzzlesLoaded(Result<PuzzleSet, String>),
    InsightLoaded(Result<Answer, String>),

    Quit,
}

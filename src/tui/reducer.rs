use tracing::{debug, info, warn};

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;
use crate::nav;
use crate::i18n::TransKey;
use crate::puzzle::{Feedback, Puzzle, PuzzleCtrl, PuzzleSet};

/// Longest UCI move: from, to and a promotion letter
const MAX_INPUT_LEN: usize = 5;

/// State reducer - like Redux reducer
///
/// Applies an action to the state and returns the effect to run, if any.
/// No I/O happens here; loading is returned as an `Effect`.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Effect) {
    let effect = match action {
        Action::NavFirst | Action::NavPrev | Action::NavNext | Action::NavLast => {
            reduce_nav(&mut state, &action);
            Effect::None
        }
        Action::Solve => {
            if let Some(ctrl) = state.puzzle.as_mut() {
                ctrl.solve();
            }
            Effect::None
        }
        Action::ViewSolution => {
            if let Some(ctrl) = state.puzzle.as_mut() {
                ctrl.view_solution();
            }
            Effect::None
        }
        Action::NextPuzzle => {
            next_puzzle(&mut state);
            Effect::None
        }
        Action::InputChar(c) => {
            if state.input.len() < MAX_INPUT_LEN {
                state.input.push(c);
            }
            Effect::None
        }
        Action::InputBackspace => {
            state.input.pop();
            Effect::None
        }
        Action::SubmitMove => {
            submit_move(&mut state);
            Effect::None
        }
        Action::SwitchScreen(screen) => {
            state.screen = screen;
            Effect::None
        }
        Action::ToggleScreen => {
            state.screen = state.screen.other();
            Effect::None
        }
        Action::PuzzlesLoaded(result) => {
            reduce_puzzles_loaded(&mut state, result);
            Effect::None
        }
        Action::InsightLoaded(result) => {
            match result {
                Ok(answer) => {
                    debug!("DATA: insight loaded with {} games", answer.games.len());
                    state.insight.answer = Some(answer);
                }
                Err(e) => {
                    warn!("DATA: failed to load games: {}", e);
                    state.status = Some(e);
                }
            }
            Effect::None
        }
        // Handled by the runtime
        Action::ActivateButton(_) | Action::RefreshData | Action::Quit => Effect::None,
    };
    (state, effect)
}

fn reduce_nav(state: &mut AppState, action: &Action) {
    let Some(ctrl) = state.puzzle.as_mut() else {
        return;
    };
    match action {
        Action::NavFirst => nav::first(ctrl),
        Action::NavPrev => nav::prev(ctrl),
        Action::NavNext => nav::next(ctrl),
        Action::NavLast => nav::last(ctrl),
        _ => {}
    }
}

fn submit_move(state: &mut AppState) {
    let uci = std::mem::take(&mut state.input);
    let Some(ctrl) = state.puzzle.as_mut() else {
        return;
    };
    if uci.len() < 4 {
        debug!("INPUT: incomplete move {:?} ignored", uci);
        return;
    }
    if !ctrl.at_frontier() {
        debug!("INPUT: move {:?} ignored away from the last revealed move", uci);
        return;
    }
    let feedback = ctrl.user_move(&uci);
    if feedback == Feedback::Fail {
        state.status = Some(format!("{}: {}", uci, state.trans.noarg(TransKey::NotTheMove)));
    } else {
        state.status = None;
    }
}

fn next_puzzle(state: &mut AppState) {
    let Some(set) = state.puzzles.as_mut() else {
        return;
    };
    let puzzle = set.advance().clone();
    load_ctrl(&mut state.puzzle, puzzle, &mut state.status);
    state.input.clear();
}

fn reduce_puzzles_loaded(state: &mut AppState, result: Result<PuzzleSet, String>) {
    match result {
        Ok(set) => {
            info!("DATA: {} puzzles loaded", set.len());
            load_ctrl(&mut state.puzzle, set.current().clone(), &mut state.status);
            state.puzzles = Some(set);
        }
        Err(e) => {
            warn!("DATA: failed to load puzzles: {}", e);
            state.status = Some(e);
        }
    }
}

fn load_ctrl(slot: &mut Option<PuzzleCtrl>, puzzle: Puzzle, status: &mut Option<String>) {
    match PuzzleCtrl::new(puzzle) {
        Ok(ctrl) => {
            *slot = Some(ctrl);
            *status = None;
        }
        Err(e) => {
            warn!("PUZZLE: cannot start puzzle: {}", e);
            *status = Some(e.to_string());
        }
    }
}

//! Element tree of the whole terminal screen
//!
//! Button handlers only enqueue an action; the runtime processes it on the
//! next loop turn.

use tokio::sync::mpsc::UnboundedSender;

use crate::i18n::TransKey;
use crate::insight::boards;
use crate::miniboard::{self, STATE_ATTR};
use crate::puzzle::{after, feedback, PuzzleActions, PuzzleCtrl};
use crate::vdom::{h, Callback, VNode};

use super::action::Action;
use super::state::{AppState, Screen};

/// Build the element tree for the current state
pub fn build(state: &AppState, tx: &UnboundedSender<Action>) -> VNode {
    let body = match state.screen {
        Screen::Puzzle => puzzle_screen(state, tx),
        Screen::Insight => insight_screen(state),
    };

    let mut root = h("div.app").child(tabs(state.screen)).child(body);
    if let Some(status) = &state.status {
        root = root.child(h("div.status").text(status.as_str()));
    }
    root.build()
}

/// Callback that enqueues the action built by `make`
fn send(tx: &UnboundedSender<Action>, make: fn() -> Action) -> Callback {
    let tx = tx.clone();
    Callback::new(move || {
        let _ = tx.send(make());
    })
}

fn tabs(current: Screen) -> VNode {
    let tab = |screen: Screen, label: &str| {
        h("span.tab")
            .class_flag("active", screen == current)
            .text(format!(" {} ", label))
    };
    h("div.tabs")
        .child(tab(Screen::Puzzle, "Puzzle"))
        .child(tab(Screen::Insight, "Insight"))
        .build()
}

fn puzzle_screen(state: &AppState, tx: &UnboundedSender<Action>) -> VNode {
    let Some(ctrl) = &state.puzzle else {
        return h("div.puzzle.loading").text("…").build();
    };
    let trans = &state.trans;
    let actions = PuzzleActions {
        solve: send(tx, || Action::Solve),
        view_solution: send(tx, || Action::ViewSolution),
    };
    let next = send(tx, || Action::NextPuzzle);

    let panel = feedback::render(&ctrl.feedback_props(), &actions, trans, || {
        after::render(&ctrl.after_props(), trans, next)
    });

    let mut screen = h("div.puzzle")
        .child(board(ctrl))
        .child(moves(ctrl));
    if let Some(panel) = panel {
        screen = screen.child(panel);
    }
    screen
        .child(h("div.puzzle__input").text(trans.with_args(TransKey::YourMove, &[state.input.as_str()])))
        .build()
}

fn board(ctrl: &PuzzleCtrl) -> VNode {
    let node = ctrl.node();
    h("div.puzzle__board")
        .child(
            h("span.mini-board.is2d")
                .key(ctrl.puzzle().id.as_str())
                .attr(
                    STATE_ATTR,
                    miniboard::state_attr(&node.fen, ctrl.vm().pov, node.uci.as_deref().unwrap_or("")),
                )
                .on_insert(miniboard::init_hook())
                .on_update(miniboard::init_hook()),
        )
        .build()
}

/// Revealed mainline moves, the current one marked active
fn moves(ctrl: &PuzzleCtrl) -> VNode {
    let current = ctrl.node().ply;
    let tree = ctrl.tree();
    let moves = tree
        .mainline()
        .into_iter()
        .skip(1)
        .take_while(|n| !n.disabled)
        .map(|n| {
            let san = n.san.as_deref().unwrap_or("?");
            let text = if n.ply % 2 == 1 {
                format!("{}. {} ", n.ply.div_ceil(2), san)
            } else {
                format!("{} ", san)
            };
            h("span.move").class_flag("active", n.ply == current).text(text)
        })
        .collect::<Vec<_>>();
    h("div.puzzle__moves").children(moves).build()
}

fn insight_screen(state: &AppState) -> VNode {
    boards::render(&state.insight, &state.trans)
        .unwrap_or_else(|| h("div.insight.loading").text("…").build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::insight::Answer;
    use crate::tui::keys::{SOLVE_BUTTON, VIEW_SOLUTION_BUTTON};
    use tokio::sync::mpsc;

    fn puzzle_state() -> AppState {
        AppState {
            puzzle: Some(PuzzleCtrl::new(fixtures::sample_puzzle()).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_screen() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let tree = build(&AppState::default(), &tx);
        assert!(tree.find_by_class("loading").is_some());
        assert!(tree.find_by_class("puzzle__feedback").is_none());
    }

    #[test]
    fn test_puzzle_screen_has_feedback_and_board() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let tree = build(&puzzle_state(), &tx);

        assert!(tree.find_by_class("play").is_some());
        let board = tree.find_by_class("mini-board").unwrap();
        assert_eq!(board.key.as_deref(), Some("legal1"));
        assert!(board.attr(STATE_ATTR).unwrap().ends_with(",white,g4d1"));
    }

    #[test]
    fn test_moves_stop_at_hidden_solution() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = puzzle_state();
        let tree = build(&state, &tx);
        let moves = tree.find_all_by_class("move");
        assert_eq!(moves.len(), fixtures::sample_puzzle().initial_ply);

        let active = tree.find_by_class("active").unwrap();
        assert!(active.has_class("tab"));
        let active_moves: Vec<_> = moves.iter().filter(|m| m.has_class("active")).collect();
        assert_eq!(active_moves.len(), 1);
        assert_eq!(active_moves[0].text_content(), "Bxd1 ");
    }

    #[test]
    fn test_buttons_enqueue_actions() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tree = build(&puzzle_state(), &tx);

        tree.find_by_class(SOLVE_BUTTON).unwrap().on_click.as_ref().unwrap().emit();
        assert!(matches!(rx.try_recv(), Ok(Action::Solve)));

        tree.find_by_class(VIEW_SOLUTION_BUTTON).unwrap().on_click.as_ref().unwrap().emit();
        assert!(matches!(rx.try_recv(), Ok(Action::ViewSolution)));
    }

    #[test]
    fn test_after_view_once_solved() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = puzzle_state();
        let ctrl = state.puzzle.as_mut().unwrap();
        ctrl.user_move("c4f7");
        ctrl.user_move("c3d5");

        let tree = build(&state, &tx);
        assert!(tree.find_by_class("after").is_some());
        assert!(tree.find_by_class("play").is_none());
        tree.find_by_class("continue").unwrap().on_click.as_ref().unwrap().emit();
        assert!(matches!(rx.try_recv(), Ok(Action::NextPuzzle)));
    }

    #[test]
    fn test_insight_screen() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState {
            screen: Screen::Insight,
            ..Default::default()
        };
        assert!(build(&state, &tx).find_by_class("loading").is_some());

        state.insight.answer = Some(Answer {
            games: fixtures::sample_games(),
        });
        let tree = build(&state, &tx);
        assert_eq!(tree.find_all_by_class("mini-board").len(), 3);
    }

    #[test]
    fn test_status_line() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = AppState {
            status: Some("oops".to_string()),
            ..Default::default()
        };
        let tree = build(&state, &tx);
        assert_eq!(tree.find_by_class("status").unwrap().text_content(), "oops");
    }
}

//! Feedback panel under the puzzle board
//!
//! Shows whose turn it is, whether the last move was right, and the action
//! bar. Once the puzzle is over the after view takes the panel over.

use tracing::debug;

use crate::i18n::{Trans, TransKey};
use crate::types::Color;
use crate::vdom::{h, Callback, ElementBuilder, MaybeVNode, VNode};

use super::model::{Feedback, ViewMode};

/// Snapshot of the view-model fields the panel reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackProps {
    pub mode: ViewMode,
    pub last_feedback: Feedback,
    pub pov: Color,
    pub can_view_solution: bool,
}

/// Handlers wired to the action bar
#[derive(Debug, Clone)]
pub struct PuzzleActions {
    pub solve: Callback,
    pub view_solution: Callback,
}

impl PuzzleActions {
    pub fn noop() -> Self {
        Self {
            solve: Callback::noop(),
            view_solution: Callback::noop(),
        }
    }
}

/// Render the panel
///
/// `after` is only called in view mode, and its output is returned as is.
pub fn render(
    props: &FeedbackProps,
    actions: &PuzzleActions,
    trans: &Trans,
    after: impl FnOnce() -> MaybeVNode,
) -> MaybeVNode {
    if props.mode == ViewMode::View {
        return after();
    }
    match props.last_feedback {
        Feedback::Init => Some(initial(props, actions, trans)),
        Feedback::Good => Some(good(props, actions, trans)),
        Feedback::Fail => Some(fail(props, actions, trans)),
        other => {
            debug!("FEEDBACK: nothing to show for {:?} in {:?} mode", other, props.mode);
            None
        }
    }
}

fn puzzle_actions(props: &FeedbackProps, actions: &PuzzleActions, trans: &Trans) -> VNode {
    h("div.puzzle_actions")
        .class_flag("show", true)
        .child(
            h("a.button.solve__button")
                .on_click(actions.solve.clone())
                .text(trans.noarg(TransKey::Solve)),
        )
        .child(
            h("a.button.button-empty")
                .class_flag("show", props.can_view_solution)
                .on_click(actions.view_solution.clone())
                .text(trans.noarg(TransKey::ViewTheSolution)),
        )
        .build()
}

fn instruction(trans: &Trans, headline: TransKey, detail: TransKey) -> ElementBuilder {
    h("div.instruction")
        .child(h("strong").text(trans.noarg(headline)))
        .child(h("em").text(trans.noarg(detail)))
}

fn initial(props: &FeedbackProps, actions: &PuzzleActions, trans: &Trans) -> VNode {
    let detail = match props.pov {
        Color::White => TransKey::FindTheBestMoveForWhite,
        Color::Black => TransKey::FindTheBestMoveForBlack,
    };
    h("div.puzzle__feedback.play")
        .child(
            h("div.player")
                .child(h("div.no-square").child(h(&format!("piece.king.{}", props.pov))))
                .child(instruction(trans, TransKey::YourTurn, detail)),
        )
        .child(puzzle_actions(props, actions, trans))
        .build()
}

fn good(props: &FeedbackProps, actions: &PuzzleActions, trans: &Trans) -> VNode {
    h("div.puzzle__feedback.good")
        .child(
            h("div.player")
                .child(h("div.icon").text("✓"))
                .child(instruction(trans, TransKey::BestMove, TransKey::KeepGoing)),
        )
        .child(puzzle_actions(props, actions, trans))
        .build()
}

fn fail(props: &FeedbackProps, actions: &PuzzleActions, trans: &Trans) -> VNode {
    h("div.puzzle__feedback.fail")
        .child(
            h("div.player")
                .child(h("div.icon").text("✗"))
                .child(instruction(trans, TransKey::NotTheMove, TransKey::TrySomethingElse)),
        )
        .child(puzzle_actions(props, actions, trans))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::vdom::html::to_html;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn props(last_feedback: Feedback, pov: Color, can_view_solution: bool) -> FeedbackProps {
        FeedbackProps {
            mode: ViewMode::Play,
            last_feedback,
            pov,
            can_view_solution,
        }
    }

    fn render_play(props: &FeedbackProps) -> MaybeVNode {
        render(props, &PuzzleActions::noop(), &Trans::default(), || {
            panic!("after view rendered in play mode")
        })
    }

    #[test]
    fn test_init_white() {
        let node = render_play(&props(Feedback::Init, Color::White, false)).unwrap();
        let el = node.as_element().unwrap();
        assert!(el.has_class("puzzle__feedback"));
        assert!(el.has_class("play"));

        let king = node.find_by_class("king").unwrap();
        assert_eq!(king.tag, "piece");
        assert!(king.has_class("white"));

        let text = node.find_by_class("instruction").unwrap().text_content();
        assert_eq!(text, "Your turnFind the best move for white.");
    }

    #[test]
    fn test_init_black() {
        let node = render_play(&props(Feedback::Init, Color::Black, false)).unwrap();
        assert!(node.find_by_class("king").unwrap().has_class("black"));
        let text = node.find_by_class("instruction").unwrap().text_content();
        assert!(text.contains("Find the best move for black."));
        assert!(!text.contains("white"));
    }

    #[test]
    fn test_good() {
        let node = render_play(&props(Feedback::Good, Color::White, false)).unwrap();
        assert!(node.as_element().unwrap().has_class("good"));
        assert_eq!(node.find_by_class("icon").unwrap().text_content(), "✓");
        assert_eq!(
            node.find_by_class("instruction").unwrap().text_content(),
            "Best move!Keep going…"
        );
    }

    #[test]
    fn test_fail() {
        let node = render_play(&props(Feedback::Fail, Color::Black, true)).unwrap();
        assert!(node.as_element().unwrap().has_class("fail"));
        assert_eq!(node.find_by_class("icon").unwrap().text_content(), "✗");
        assert_eq!(
            node.find_by_class("instruction").unwrap().text_content(),
            "That's not the move!Try something else."
        );
    }

    #[test]
    fn test_view_mode_returns_after_output() {
        let mut p = props(Feedback::Win, Color::White, true);
        p.mode = ViewMode::View;
        let after = h("div.puzzle__feedback.after").text("done").build();
        let expected = to_html(&after);

        let node = render(&p, &PuzzleActions::noop(), &Trans::default(), || Some(after)).unwrap();
        assert_eq!(to_html(&node), expected);

        let none = render(&p, &PuzzleActions::noop(), &Trans::default(), || None);
        assert!(none.is_none());
    }

    #[test]
    fn test_win_outside_view_renders_nothing() {
        assert!(render_play(&props(Feedback::Win, Color::White, true)).is_none());
    }

    #[test]
    fn test_view_solution_button_gated_not_removed() {
        for feedback in [Feedback::Init, Feedback::Good, Feedback::Fail] {
            for can_view in [false, true] {
                let node = render_play(&props(feedback, Color::White, can_view)).unwrap();
                let bar = node.find_by_class("puzzle_actions").unwrap();
                assert!(bar.has_class("show"));

                let buttons = node.find_all_by_class("button");
                assert_eq!(buttons.len(), 2);
                assert!(buttons[0].has_class("solve__button"));
                assert!(buttons[0].is_shown());

                let view = buttons[1];
                assert!(view.has_class("button-empty"));
                assert_eq!(view.is_shown(), can_view);
                assert_eq!(view.text_content(), "View the solution");
            }
        }
    }

    #[test]
    fn test_buttons_emit_injected_callbacks() {
        let solved = Arc::new(AtomicUsize::new(0));
        let viewed = Arc::new(AtomicUsize::new(0));
        let actions = PuzzleActions {
            solve: {
                let solved = solved.clone();
                Callback::new(move || {
                    solved.fetch_add(1, Ordering::SeqCst);
                })
            },
            view_solution: {
                let viewed = viewed.clone();
                Callback::new(move || {
                    viewed.fetch_add(1, Ordering::SeqCst);
                })
            },
        };

        let node = render(
            &props(Feedback::Fail, Color::White, true),
            &actions,
            &Trans::default(),
            || None,
        )
        .unwrap();
        // Rendering alone never runs a handler
        assert_eq!(solved.load(Ordering::SeqCst), 0);
        assert_eq!(viewed.load(Ordering::SeqCst), 0);

        let solve = node.find_by_class("solve__button").unwrap();
        solve.on_click.as_ref().unwrap().emit();
        let view = node.find_by_class("button-empty").unwrap();
        view.on_click.as_ref().unwrap().emit();
        view.on_click.as_ref().unwrap().emit();

        assert_eq!(solved.load(Ordering::SeqCst), 1);
        assert_eq!(viewed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_markup() {
        let node = render_play(&props(Feedback::Init, Color::Black, false)).unwrap();
        assert_eq!(
            to_html(&node),
            "<div class=\"puzzle__feedback play\">\
             <div class=\"player\">\
             <div class=\"no-square\"><piece class=\"king black\"></piece></div>\
             <div class=\"instruction\"><strong>Your turn</strong><em>Find the best move for black.</em></div>\
             </div>\
             <div class=\"puzzle_actions show\">\
             <a class=\"button solve__button\">Solve</a>\
             <a class=\"button button-empty\">View the solution</a>\
             </div>\
             </div>"
        );
    }

    #[test]
    fn test_translated() {
        let node = render(
            &props(Feedback::Good, Color::White, false),
            &PuzzleActions::noop(),
            &Trans::new(Lang::Fr),
            || None,
        )
        .unwrap();
        assert_eq!(
            node.find_by_class("solve__button").unwrap().text_content(),
            "Résoudre"
        );
    }
}

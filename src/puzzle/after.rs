//! View shown once a puzzle is over

use crate::i18n::{Trans, TransKey};
use crate::vdom::{h, Callback, MaybeVNode};

use super::model::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterProps {
    pub puzzle_id: String,
    pub rating: u32,
    /// `None` while the puzzle is still being played
    pub result: Option<Outcome>,
}

pub fn render(props: &AfterProps, trans: &Trans, next: Callback) -> MaybeVNode {
    let (class, headline) = match props.result? {
        Outcome::Solved => ("div.complete", TransKey::PuzzleSuccess),
        Outcome::Failed => ("div.failed", TransKey::PuzzleFailed),
    };

    Some(
        h("div.puzzle__feedback.after")
            .child(h(class).text(trans.noarg(headline)))
            .child(
                h("div.puzzle__info")
                    .child(h("span.id").text(trans.with_args(TransKey::PuzzleId, &[props.puzzle_id.as_str()])))
                    .child(h("br"))
                    .child(
                        h("span.rating")
                            .text(trans.with_args(TransKey::RatingX, &[props.rating.to_string().as_str()])),
                    ),
            )
            .child(
                h("a.button.continue")
                    .on_click(next)
                    .text(trans.noarg(TransKey::ContinueTraining)),
            )
            .build(),
    )
}

use anyhow::Result;

use crate::fixtures;
use crate::i18n::Trans;
use crate::puzzle::{
    after, feedback, AfterProps, Feedback, FeedbackProps, Outcome, PuzzleActions, ViewMode,
};
use crate::types::Color;
use crate::vdom::{html::to_html_opt, Callback};

/// Puzzle page state to preview the feedback panel in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Init,
    Good,
    Fail,
    /// Last move played while still in play mode
    Win,
    /// Puzzle over, after view shown
    View,
}

impl PanelState {
    fn mode_and_feedback(self) -> (ViewMode, Feedback) {
        match self {
            Self::Init => (ViewMode::Play, Feedback::Init),
            Self::Good => (ViewMode::Play, Feedback::Good),
            Self::Fail => (ViewMode::Play, Feedback::Fail),
            Self::Win => (ViewMode::Play, Feedback::Win),
            Self::View => (ViewMode::View, Feedback::Win),
        }
    }
}

/// Options of the feedback preview
#[derive(Debug, Clone, Copy)]
pub struct PanelOptions {
    pub state: PanelState,
    pub pov: Color,
    pub can_view_solution: bool,
    /// Outcome shown by the after view
    pub failed: bool,
}

/// Render the feedback panel markup; empty when nothing is shown
pub fn format(options: PanelOptions, trans: &Trans) -> String {
    let (mode, last_feedback) = options.state.mode_and_feedback();
    let props = FeedbackProps {
        mode,
        last_feedback,
        pov: options.pov,
        can_view_solution: options.can_view_solution,
    };

    let puzzle = match options.pov {
        Color::White => fixtures::sample_puzzle(),
        Color::Black => fixtures::sample_black_puzzle(),
    };
    let after_props = AfterProps {
        puzzle_id: puzzle.id,
        rating: puzzle.rating,
        result: Some(if options.failed {
            Outcome::Failed
        } else {
            Outcome::Solved
        }),
    };

    let panel = feedback::render(&props, &PuzzleActions::noop(), trans, || {
        after::render(&after_props, trans, Callback::noop())
    });
    to_html_opt(panel.as_ref())
}

pub fn run(options: PanelOptions, trans: &Trans) -> Result<()> {
    let html = format(options, trans);
    if html.is_empty() {
        println!("(nothing rendered for {:?})", options.state);
    } else {
        println!("{}", html);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    fn options(state: PanelState) -> PanelOptions {
        PanelOptions {
            state,
            pov: Color::White,
            can_view_solution: false,
            failed: false,
        }
    }

    #[test]
    fn test_init_panel() {
        let html = format(options(PanelState::Init), &Trans::new(Lang::En));
        assert!(html.starts_with("<div class=\"puzzle__feedback play\">"));
        assert!(html.contains("<piece class=\"king white\"></piece>"));
    }

    #[test]
    fn test_black_pov() {
        let opts = PanelOptions {
            pov: Color::Black,
            ..options(PanelState::Init)
        };
        let html = format(opts, &Trans::new(Lang::En));
        assert!(html.contains("king black"));
        assert!(html.contains("Find the best move for black."));
    }

    #[test]
    fn test_win_in_play_renders_nothing() {
        assert_eq!(format(options(PanelState::Win), &Trans::new(Lang::En)), "");
    }

    #[test]
    fn test_view_uses_outcome() {
        let trans = Trans::new(Lang::En);
        assert!(format(options(PanelState::View), &trans).contains("Success!"));

        let failed = PanelOptions {
            failed: true,
            ..options(PanelState::View)
        };
        assert!(format(failed, &trans).contains("Puzzle failed"));
    }
}

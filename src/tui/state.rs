use crate::config::Config;
use crate::i18n::Trans;
use crate::insight::InsightVm;
use crate::puzzle::{PuzzleCtrl, PuzzleSet};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Puzzle,
    Insight,
}

impl Screen {
    pub fn other(self) -> Self {
        match self {
            Screen::Puzzle => Screen::Insight,
            Screen::Insight => Screen::Puzzle,
        }
    }
}

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Views receive snapshots of this state as props.
#[derive(Default)]
pub struct AppState {
    pub screen: Screen,

    /// Puzzle being solved, once the set is loaded
    pub puzzle: Option<PuzzleCtrl>,
    pub puzzles: Option<PuzzleSet>,

    pub insight: InsightVm,

    /// Move typed by the user, not yet submitted
    pub input: String,

    /// Status bar message
    pub status: Option<String>,

    pub trans: Trans,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            trans: Trans::new(config.lang()),
            config,
            ..Default::default()
        }
    }
}

use serde::Deserialize;

use crate::types::Color;

/// A player as shown under a mini-board
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub rating: u32,
}

/// A sampled game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub fen: String,
    /// Side the insight is about, also the board orientation
    pub color: Color,
    #[serde(default)]
    pub last_move: String,
    pub user1: Player,
    pub user2: Player,
}

/// Result of an insight query
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Answer {
    pub games: Vec<Game>,
}

/// View-model snapshot of the insight page
#[derive(Debug, Clone, Default)]
pub struct InsightVm {
    pub answer: Option<Answer>,
}

/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the views (insight, puzzle), the tui host and the binary (main.rs).
use std::fmt;

use serde::Deserialize;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Parse `white` / `black` (case-insensitive)
    pub fn parse(s: &str) -> Option<Color> {
        match s.trim().to_lowercase().as_str() {
            "white" => Some(Color::White),
            "black" => Some(Color::Black),
            _ => None,
        }
    }

    /// Side to move according to the active color field of a FEN
    ///
    /// Missing or unknown fields read as white.
    pub fn to_move_in_fen(fen: &str) -> Color {
        match fen.split_whitespace().nth(1) {
            Some("b") => Color::Black,
            _ => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

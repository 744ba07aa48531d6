//! Mini-board widget
//!
//! Game tiles carry their position in a `data-state` attribute formatted as
//! `fen,color,lastMove`. The insert/update hook returned by [`init_hook`]
//! parses that attribute into a [`MiniBoard`] and keeps it in the host's
//! widget store, where the renderer picks it up.

use tracing::warn;

use crate::error::MiniBoardError;
use crate::types::Color;
use crate::vdom::{Hook, Mount};

/// Attribute holding the mini-board state
pub const STATE_ATTR: &str = "data-state";

/// Build the `data-state` attribute value
pub fn state_attr(fen: &str, color: Color, last_move: &str) -> String {
    format!("{},{},{}", fen, color, last_move)
}

/// A parsed mini-board
#[derive(Debug, Clone, PartialEq)]
pub struct MiniBoard {
    /// Indexed by square (a1 = 0, h8 = 63)
    squares: [Option<char>; 64],
    orientation: Color,
    last_move: Option<(usize, usize)>,
}

/// A square as drawn, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySquare {
    pub piece: Option<char>,
    pub dark: bool,
    pub highlighted: bool,
}

impl MiniBoard {
    /// Parse a `fen,color,lastMove` state string
    ///
    /// Only the placement field of the FEN is read. The last move may be
    /// empty; an unreadable last move is ignored rather than rejected.
    pub fn parse_state(state: &str) -> Result<Self, MiniBoardError> {
        let mut parts = state.splitn(3, ',');
        let (fen, color, last_move) = match (parts.next(), parts.next(), parts.next()) {
            (Some(fen), Some(color), last_move) => (fen, color, last_move.unwrap_or("")),
            _ => return Err(MiniBoardError::MalformedState(state.to_string())),
        };

        let orientation =
            Color::parse(color).ok_or_else(|| MiniBoardError::InvalidColor(color.to_string()))?;
        let placement = fen.split_whitespace().next().unwrap_or("");

        Ok(Self {
            squares: parse_placement(placement)?,
            orientation,
            last_move: parse_last_move(last_move),
        })
    }

    pub fn orientation(&self) -> Color {
        self.orientation
    }

    /// Piece letter (FEN notation) on a square
    pub fn piece_at(&self, file: usize, rank: usize) -> Option<char> {
        self.squares.get(file + 8 * rank).copied().flatten()
    }

    /// Rows from the viewer's side, top row first
    pub fn rows(&self) -> Vec<Vec<DisplaySquare>> {
        let ranks: Vec<usize> = match self.orientation {
            Color::White => (0..8).rev().collect(),
            Color::Black => (0..8).collect(),
        };
        let files: Vec<usize> = match self.orientation {
            Color::White => (0..8).collect(),
            Color::Black => (0..8).rev().collect(),
        };

        ranks
            .iter()
            .map(|&rank| {
                files
                    .iter()
                    .map(|&file| {
                        let square = file + 8 * rank;
                        DisplaySquare {
                            piece: self.piece_at(file, rank),
                            dark: (file + rank) % 2 == 0,
                            highlighted: self
                                .last_move
                                .is_some_and(|(from, to)| square == from || square == to),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Figurine for a FEN piece letter
pub fn figurine(piece: char) -> char {
    match piece {
        'K' => '♔',
        'Q' => '♕',
        'R' => '♖',
        'B' => '♗',
        'N' => '♘',
        'P' => '♙',
        'k' => '♚',
        'q' => '♛',
        'r' => '♜',
        'b' => '♝',
        'n' => '♞',
        'p' => '♟',
        other => other,
    }
}

fn parse_placement(placement: &str) -> Result<[Option<char>; 64], MiniBoardError> {
    let invalid = || MiniBoardError::InvalidPlacement(placement.to_string());
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid());
    }

    let mut squares = [None; 64];
    // FEN lists rank 8 first
    for (i, row) in rows.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as usize;
            } else if "kqrbnpKQRBNP".contains(ch) {
                if file >= 8 {
                    return Err(invalid());
                }
                squares[file + 8 * rank] = Some(ch);
                file += 1;
            } else {
                return Err(invalid());
            }
        }
        if file != 8 {
            return Err(invalid());
        }
    }
    Ok(squares)
}

fn parse_last_move(last_move: &str) -> Option<(usize, usize)> {
    let bytes = last_move.trim().as_bytes();
    if bytes.len() < 4 {
        return None;
    }
    let square = |f: u8, r: u8| -> Option<usize> {
        if (b'a'..=b'h').contains(&f) && (b'1'..=b'8').contains(&r) {
            Some((f - b'a') as usize + 8 * (r - b'1') as usize)
        } else {
            None
        }
    };
    Some((square(bytes[0], bytes[1])?, square(bytes[2], bytes[3])?))
}

/// Hook that (re)initializes the mini-board of the mounted element
pub fn init_hook() -> Hook {
    Hook::new(init)
}

fn init(mount: &mut Mount<'_>) {
    let Some(state) = mount.element.attr(STATE_ATTR) else {
        warn!("MINIBOARD: element {} has no {} attribute", mount.id, STATE_ATTR);
        return;
    };
    match MiniBoard::parse_state(state) {
        Ok(board) => mount.widgets.insert(mount.id, board),
        Err(e) => {
            warn!("MINIBOARD: cannot initialize {}: {}", mount.id, e);
            mount.widgets.remove(mount.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{h, WidgetStore};

    const ITALIAN: &str = "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

    #[test]
    fn test_parse_state() {
        let board = MiniBoard::parse_state(&format!("{},white,f8c5", ITALIAN)).unwrap();
        assert_eq!(board.orientation(), Color::White);
        assert_eq!(board.piece_at(4, 0), Some('K'));
        assert_eq!(board.piece_at(2, 4), Some('b'));
        assert_eq!(board.piece_at(4, 4), Some('p'));
        assert_eq!(board.piece_at(4, 2), None);
    }

    #[test]
    fn test_rows_white_orientation() {
        let board = MiniBoard::parse_state(&format!("{},white,f8c5", ITALIAN)).unwrap();
        let rows = board.rows();
        assert_eq!(rows.len(), 8);
        // Top-left is a8 with a black rook, a light square
        assert_eq!(rows[0][0].piece, Some('r'));
        assert!(!rows[0][0].dark);
        // Bottom-left is a1, a dark square
        assert!(rows[7][0].dark);
        // f8 and c5 are highlighted
        assert!(rows[0][5].highlighted);
        assert!(rows[3][2].highlighted);
        assert!(!rows[0][0].highlighted);
    }

    #[test]
    fn test_rows_black_orientation() {
        let board = MiniBoard::parse_state(&format!("{},black,", ITALIAN)).unwrap();
        let rows = board.rows();
        // Top-left is h1 with a white rook
        assert_eq!(rows[0][0].piece, Some('R'));
        // Bottom-right is a8
        assert_eq!(rows[7][7].piece, Some('r'));
        assert!(rows.iter().flatten().all(|s| !s.highlighted));
    }

    #[test]
    fn test_parse_state_errors() {
        assert!(matches!(
            MiniBoard::parse_state("no commas"),
            Err(MiniBoardError::MalformedState(_))
        ));
        assert!(matches!(
            MiniBoard::parse_state(&format!("{},green,", ITALIAN)),
            Err(MiniBoardError::InvalidColor(_))
        ));
        assert!(matches!(
            MiniBoard::parse_state("8/8/8,white,"),
            Err(MiniBoardError::InvalidPlacement(_))
        ));
        assert!(matches!(
            MiniBoard::parse_state("9/8/8/8/8/8/8/8,white,"),
            Err(MiniBoardError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn test_state_attr_format() {
        assert_eq!(state_attr("8/8/8/8/8/8/8/8 w - - 0 1", Color::Black, "e2e4"), "8/8/8/8/8/8/8/8 w - - 0 1,black,e2e4");
    }

    #[test]
    fn test_hook_stores_board() {
        let node = h("span.mini-board")
            .attr(STATE_ATTR, format!("{},white,e2e4", ITALIAN))
            .build();
        let el = node.as_element().unwrap();
        let mut widgets = WidgetStore::new();

        init_hook().call(&mut Mount {
            id: "0.0",
            element: el,
            widgets: &mut widgets,
        });

        assert!(widgets.get::<MiniBoard>("0.0").is_some());
    }

    #[test]
    fn test_hook_with_bad_state_clears_board() {
        let mut widgets = WidgetStore::new();
        widgets.insert("0.0", MiniBoard::parse_state(&format!("{},white,", ITALIAN)).unwrap());

        let node = h("span.mini-board").attr(STATE_ATTR, "garbage").build();
        init_hook().call(&mut Mount {
            id: "0.0",
            element: node.as_element().unwrap(),
            widgets: &mut widgets,
        });

        assert!(widgets.get::<MiniBoard>("0.0").is_none());
    }

    #[test]
    fn test_figurine() {
        assert_eq!(figurine('K'), '♔');
        assert_eq!(figurine('n'), '♞');
    }
}

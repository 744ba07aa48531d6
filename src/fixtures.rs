/// Fixture data for testing and development
///
/// This module provides consistent, deterministic data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Running the app without puzzle or game files
/// 3. Benchmarks - providing consistent data for performance testing
use crate::insight::{Game, Player};
use crate::puzzle::{Puzzle, PuzzleMove};
use crate::types::Color;

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Legal's mate: white to play after 5...Bxd1, solution Bxf7+ Ke7 Nd5#
pub fn sample_puzzle() -> Puzzle {
    create_puzzle(
        "legal1",
        1250,
        &["mateIn2", "sacrifice"],
        10,
        &[
            ("e2e4", "e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"),
            ("e7e5", "e5", "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"),
            ("g1f3", "Nf3", "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"),
            ("d7d6", "d6", "rnbqkbnr/ppp2ppp/3p4/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3"),
            ("f1c4", "Bc4", "rnbqkbnr/ppp2ppp/3p4/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 1 3"),
            ("c8g4", "Bg4", "rn1qkbnr/ppp2ppp/3p4/4p3/2B1P1b1/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 4"),
            ("b1c3", "Nc3", "rn1qkbnr/ppp2ppp/3p4/4p3/2B1P1b1/2N2N2/PPPP1PPP/R1BQK2R b KQkq - 3 4"),
            ("g7g6", "g6", "rn1qkbnr/ppp2p1p/3p2p1/4p3/2B1P1b1/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 0 5"),
            ("f3e5", "Nxe5", "rn1qkbnr/ppp2p1p/3p2p1/4N3/2B1P1b1/2N5/PPPP1PPP/R1BQK2R b KQkq - 0 5"),
            ("g4d1", "Bxd1", "rn1qkbnr/ppp2p1p/3p2p1/4N3/2B1P3/2N5/PPPP1PPP/R1BbK2R w KQkq - 0 6"),
            ("c4f7", "Bxf7+", "rn1qkbnr/ppp2B1p/3p2p1/4N3/4P3/2N5/PPPP1PPP/R1BbK2R b KQkq - 0 6"),
            ("e8e7", "Ke7", "rn1q1bnr/ppp1kB1p/3p2p1/4N3/4P3/2N5/PPPP1PPP/R1BbK2R w KQ - 1 7"),
            ("c3d5", "Nd5#", "rn1q1bnr/ppp1kB1p/3p2p1/3NN3/4P3/8/PPPP1PPP/R1BbK2R b KQ - 2 7"),
        ],
    )
}

/// Fool's mate: black to play, solution Qh4#
pub fn sample_black_puzzle() -> Puzzle {
    create_puzzle(
        "fool1",
        600,
        &["mateIn1", "opening"],
        3,
        &[
            ("f2f3", "f3", "rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR b KQkq - 0 1"),
            ("e7e5", "e5", "rnbqkbnr/pppp1ppp/8/4p3/8/5P2/PPPPP1PP/RNBQKBNR w KQkq - 0 2"),
            ("g2g4", "g4", "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2"),
            ("d8h4", "Qh4#", "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
        ],
    )
}

/// Both sample puzzles, the white one first
pub fn sample_puzzles() -> Vec<Puzzle> {
    vec![sample_puzzle(), sample_black_puzzle()]
}

/// Helper to create a puzzle from `(uci, san, fen)` triples
fn create_puzzle(
    id: &str,
    rating: u32,
    themes: &[&str],
    initial_ply: usize,
    moves: &[(&str, &str, &str)],
) -> Puzzle {
    Puzzle {
        id: id.to_string(),
        rating,
        themes: themes.iter().map(|t| t.to_string()).collect(),
        fen: START_FEN.to_string(),
        moves: moves
            .iter()
            .map(|(uci, san, fen)| PuzzleMove {
                uci: uci.to_string(),
                san: san.to_string(),
                fen: fen.to_string(),
            })
            .collect(),
        initial_ply,
    }
}

/// Sampled games for the insight page
pub fn sample_games() -> Vec<Game> {
    vec![
        create_game(
            "q7ZvsdUF",
            "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
            Color::White,
            "h5f7",
            ("Hikaru", Some("GM"), 3150),
            ("Kramnik", Some("GM"), 3010),
        ),
        create_game(
            "Bn2Lr5k",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            Color::Black,
            "d8h4",
            ("patzer42", None, 1480),
            ("ChessNetwork", Some("NM"), 2290),
        ),
        create_game(
            "x0Pq8WmA",
            "rn1q1bnr/ppp1kB1p/3p2p1/3NN3/4P3/8/PPPP1PPP/R1BbK2R b KQ - 2 7",
            Color::White,
            "c3d5",
            ("legalfan", None, 1720),
            ("blunderbuss", None, 1695),
        ),
    ]
}

/// Helper to create a sampled game
fn create_game(
    id: &str,
    fen: &str,
    color: Color,
    last_move: &str,
    user1: (&str, Option<&str>, u32),
    user2: (&str, Option<&str>, u32),
) -> Game {
    let player = |(name, title, rating): (&str, Option<&str>, u32)| Player {
        name: name.to_string(),
        title: title.map(str::to_string),
        rating,
    };
    Game {
        id: id.to_string(),
        fen: fen.to_string(),
        color,
        last_move: last_move.to_string(),
        user1: player(user1),
        user2: player(user2),
    }
}

use thiserror::Error;

/// Move tree errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid UCI move: {0}")]
    InvalidUci(String),
}

/// Puzzle loading and solving errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Puzzle {id} has no solution moves after ply {initial_ply}")]
    NoSolution { id: String, initial_ply: usize },

    #[error("Puzzle {id} starts at ply {initial_ply} but only has {moves} moves")]
    InitialPlyOutOfRange {
        id: String,
        initial_ply: usize,
        moves: usize,
    },

    #[error("Puzzle set is empty")]
    EmptySet,

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Mini-board state parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MiniBoardError {
    #[error("Expected `fen,color,lastMove` but got {0:?}")]
    MalformedState(String),

    #[error("Invalid board placement: {0}")]
    InvalidPlacement(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Errors loading puzzles and games from disk
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

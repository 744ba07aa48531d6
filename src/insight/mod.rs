//! Insight page: the sample of games behind an insight

pub mod boards;
pub mod model;

pub use model::{Answer, Game, InsightVm, Player};

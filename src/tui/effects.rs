use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::data_provider::TrainingDataProvider;

/// Side effect returned by the reducer, executed by the runtime
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => write!(f, "Action({:?})", action),
            Effect::Batch(effects) => write!(f, "Batch({:?})", effects),
            Effect::Async(_) => write!(f, "Async(..)"),
        }
    }
}

/// Effect handler for data loading operations
///
/// Each method returns an Effect that will dispatch the appropriate
/// *Loaded action when complete.
pub struct DataEffects {
    provider: Arc<dyn TrainingDataProvider>,
}

impl DataEffects {
    pub fn new(provider: Arc<dyn TrainingDataProvider>) -> Self {
        Self { provider }
    }

    /// Handle a refresh request - loads puzzles and the insight answer
    pub fn handle_refresh(&self) -> Effect {
        Effect::Batch(vec![self.load_puzzles(), self.load_insight()])
    }

    pub fn load_puzzles(&self) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let result = provider.puzzle_set().await;
            Action::PuzzlesLoaded(result.map_err(|e| e.to_string()))
        }))
    }

    pub fn load_insight(&self) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let result = provider.insight().await;
            Action::InsightLoaded(result.map_err(|e| e.to_string()))
        }))
    }
}

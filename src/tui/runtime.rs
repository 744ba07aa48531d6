use std::sync::Arc;

use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::renderer::Renderer;
use super::state::AppState;
use super::view;
use crate::vdom::{Element, VNode, WidgetStore};

/// Application runtime - manages state, actions and the element tree
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the element tree and keeping the last one for button lookup
/// - Keeping the widget store that element hooks write into
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Widgets created by element hooks, by element identity
    widgets: WidgetStore,
    renderer: Renderer,

    /// Tree built for the last frame
    last_tree: Option<VNode>,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            widgets: WidgetStore::new(),
            renderer: Renderer::new(),
            last_tree: None,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn widgets(&self) -> &WidgetStore {
        &self.widgets
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let effect = match action {
            Action::RefreshData => {
                debug!("ACTION: RefreshData - generating load effects");
                self.data_effects.handle_refresh()
            }
            Action::ActivateButton(class) => {
                self.activate(class);
                Effect::None
            }
            action => {
                let state = std::mem::take(&mut self.state);
                let (new_state, effect) = reduce(state, action);
                self.state = new_state;
                effect
            }
        };

        self.execute_effect(effect);
    }

    /// Emit the click handler of the shown button carrying `class`
    ///
    /// Handlers only enqueue actions, so nothing changes until the next
    /// `process_actions`. Returns whether a button was found.
    fn activate(&self, class: &str) -> bool {
        let Some(tree) = self.last_tree.as_ref().and_then(VNode::as_element) else {
            debug!("ACTION: no tree built yet, cannot activate {}", class);
            return false;
        };
        match find_shown(tree, class).and_then(|el| el.on_click.as_ref()) {
            Some(callback) => {
                debug!("ACTION: activating {}", class);
                callback.emit();
                true
            }
            None => {
                debug!("ACTION: no shown button {}", class);
                false
            }
        }
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = self.action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the element tree from current state
    pub fn build(&mut self) -> VNode {
        let tree = view::build(&self.state, &self.action_tx);
        self.last_tree = Some(tree.clone());
        tree
    }

    /// Build the element tree and draw it
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let tree = self.build();
        self.renderer
            .render(&tree, &mut self.widgets, &self.state.config.theme, area, buf);
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
        }
    }
}

/// First element carrying `class` outside hidden subtrees
fn find_shown<'a>(el: &'a Element, class: &str) -> Option<&'a Element> {
    if !el.is_shown() {
        return None;
    }
    if el.has_class(class) {
        return Some(el);
    }
    el.children
        .iter()
        .filter_map(VNode::as_element)
        .find_map(|child| find_shown(child, class))
}

use super::actions::Action;
use super::models::AppState;
use super::reducer::Reducer;

pub type Listener = Box<dyn FnMut(&AppState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Single owner of the application state. State only changes through
/// `dispatch`, which runs the reducer and then notifies every subscriber
/// before returning.
pub struct Store<R: Reducer> {
    state: AppState,
    reducer: R,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: AppState, reducer: R) -> Self {
        tracing::debug!(items = initial.len(), "store created");
        Self {
            state: initial,
            reducer,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn get_state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(kind = action.kind(), ?action, "dispatch");
        self.reducer.reduce(&mut self.state, &action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        tracing::debug!(items = self.state.len(), "store torn down");
    }
}

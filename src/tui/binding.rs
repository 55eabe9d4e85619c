use crate::store::actions::{self, Action};
use crate::store::models::{AppState, ToDoItem};

/// Props the home view reads from the store.
#[derive(Debug, Clone, Copy)]
pub struct StateProps<'a> {
    pub to_dos: &'a [ToDoItem],
}

pub fn map_state_to_props(state: &AppState) -> StateProps<'_> {
    StateProps {
        to_dos: &state.to_dos,
    }
}

/// Callbacks bound to a dispatch function.
pub struct DispatchProps<D: FnMut(Action)> {
    dispatch: D,
}

impl<D: FnMut(Action)> DispatchProps<D> {
    pub fn add_to_do(&mut self, text: String) {
        (self.dispatch)(actions::add_to_do(text));
    }

    pub fn delete_to_do(&mut self, id: u64) {
        (self.dispatch)(actions::delete_to_do(id));
    }
}

pub fn map_dispatch_to_props<D: FnMut(Action)>(dispatch: D) -> DispatchProps<D> {
    DispatchProps { dispatch }
}

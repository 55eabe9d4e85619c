use super::actions::Action;
use super::models::{AppState, ToDoItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait Reducer {
    fn reduce(&self, state: &mut AppState, action: &Action);
}

/// Where newly added items land in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    #[default]
    Top,
    Bottom,
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertPosition::Top => write!(f, "top"),
            InsertPosition::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for InsertPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(InsertPosition::Top),
            "bottom" => Ok(InsertPosition::Bottom),
            other => Err(format!("expected 'top' or 'bottom', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToDoReducer {
    insert_position: InsertPosition,
}

impl ToDoReducer {
    pub fn new(insert_position: InsertPosition) -> Self {
        Self { insert_position }
    }
}

impl Reducer for ToDoReducer {
    fn reduce(&self, state: &mut AppState, action: &Action) {
        match action {
            Action::AddToDo(text) => {
                let id = state.allocate_id();
                let item = ToDoItem::new(id, text.clone());
                match self.insert_position {
                    InsertPosition::Top => state.to_dos.insert(0, item),
                    InsertPosition::Bottom => state.to_dos.push(item),
                }
                tracing::debug!(id, position = %self.insert_position, "to-do created");
            }
            Action::DeleteToDo(id) => {
                let before = state.to_dos.len();
                state.to_dos.retain(|item| item.id != *id);
                if state.to_dos.len() == before {
                    tracing::debug!(id, "delete ignored, no such to-do");
                } else {
                    tracing::debug!(id, "to-do deleted");
                }
            }
        }
    }
}

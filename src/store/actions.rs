use serde::{Deserialize, Serialize};

/// An intended state change, tagged the same way the web store tags it:
/// `{ "type": "ADD_TODO", "payload": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    #[serde(rename = "ADD_TODO")]
    AddToDo(String),
    #[serde(rename = "DELETE_TODO")]
    DeleteToDo(u64),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddToDo(_) => "ADD_TODO",
            Self::DeleteToDo(_) => "DELETE_TODO",
        }
    }
}

pub fn add_to_do(text: impl Into<String>) -> Action {
    Action::AddToDo(text.into())
}

pub fn delete_to_do(id: u64) -> Action {
    Action::DeleteToDo(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    pub id: u64,
    pub text: String,
}

impl ToDoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self { id, text }
    }
}

/// Global application state: the ordered to-do sequence and the next id to hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub to_dos: Vec<ToDoItem>,
    next_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            to_dos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_items(to_dos: Vec<ToDoItem>) -> Self {
        let next_id = to_dos.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self { to_dos, next_id }
    }

    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.to_dos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_dos.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

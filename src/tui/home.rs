use crate::tui::binding::StateProps;
use crate::tui::todo::ToDo;

/// A change of the form's text field, carrying the field's complete new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

impl ChangeEvent {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

/// A form submission. Unless a handler prevents it, the default action of a
/// submit is to move focus away from the form.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The home screen: a form holding the text being typed and the list of
/// to-dos projected from the store.
#[derive(Debug, Default)]
pub struct Home {
    text: String,
}

impl Home {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_change(&mut self, event: ChangeEvent) {
        self.text = event.value;
    }

    pub fn on_submit(&mut self, event: &mut SubmitEvent, add_to_do: impl FnOnce(String)) {
        event.prevent_default();
        add_to_do(self.text.clone());
        self.text.clear();
    }

    pub fn render_list<'a>(props: &StateProps<'a>) -> Vec<ToDo<'a>> {
        props
            .to_dos
            .iter()
            .map(|item| ToDo::new(item.id, &item.text))
            .collect()
    }
}

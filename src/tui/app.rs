use crate::store::container::{Store, SubscriptionId};
use crate::store::models::ToDoItem;
use crate::store::reducer::ToDoReducer;
use crate::tui::binding::{map_dispatch_to_props, map_state_to_props, StateProps};
use crate::tui::handlers::{FormAction, KeyHandler, ListAction, PopupAction};
use crate::tui::home::{ChangeEvent, Home, SubmitEvent};
use crate::tui::input::TextInput;
use anyhow::Result;
use crossterm::event::KeyEvent;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

pub struct App {
    store: Store<ToDoReducer>,
    home: Home,
    input: TextInput,
    pub focus: Focus,
    pub selected_index: usize,
    pub help_mode: bool,
    pub detail: Option<u64>,
    pub should_quit: bool,
    state_changed: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    pub fn new(mut store: Store<ToDoReducer>) -> Self {
        let state_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&state_changed);
        let subscription = store.subscribe(Box::new(move |_| flag.set(true)));

        Self {
            store,
            home: Home::new(),
            input: TextInput::new(),
            focus: Focus::Form,
            selected_index: 0,
            help_mode: false,
            detail: None,
            should_quit: false,
            state_changed,
            subscription,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_key(key_event);
        } else if self.detail.is_some() {
            self.handle_detail_key(key_event);
        } else {
            match self.focus {
                Focus::Form => self.handle_form_key(key_event),
                Focus::List => self.handle_list_key(key_event),
            }
        }
        self.sync_with_store();
        Ok(())
    }

    pub fn state_props(&self) -> StateProps<'_> {
        map_state_to_props(self.store.get_state())
    }

    pub fn input_text(&self) -> &str {
        self.home.text()
    }

    pub fn input_cursor(&self) -> usize {
        self.input.cursor(self.home.text())
    }

    pub fn detail_item(&self) -> Option<&ToDoItem> {
        let id = self.detail?;
        self.store.get_state().to_dos.iter().find(|item| item.id == id)
    }

    fn handle_form_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_form_key(key_event) {
            FormAction::Edit(edit) => {
                if let Some(value) = self.input.apply(self.home.text(), edit) {
                    self.home.on_change(ChangeEvent::new(value));
                }
            }
            FormAction::Submit => self.submit_form(),
            FormAction::Blur | FormAction::SwitchFocus => self.focus = Focus::List,
            FormAction::Quit => self.should_quit = true,
            FormAction::None => {}
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_key(key_event) {
            ListAction::Quit => self.should_quit = true,
            ListAction::SwitchFocus | ListAction::FocusForm => self.focus = Focus::Form,
            ListAction::MoveSelectionUp => self.move_selection_up(),
            ListAction::MoveSelectionDown => self.move_selection_down(),
            ListAction::DeleteSelected => self.delete_selected(),
            ListAction::ShowDetail => {
                self.detail = self.selected_item().map(|item| item.id);
            }
            ListAction::ShowHelp => self.help_mode = true,
            ListAction::None => {}
        }
    }

    fn handle_help_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_key(key_event) {
            PopupAction::Close => self.help_mode = false,
            PopupAction::Quit => self.should_quit = true,
            PopupAction::None => {}
        }
    }

    fn handle_detail_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_detail_key(key_event) {
            PopupAction::Close => self.detail = None,
            PopupAction::Quit => self.should_quit = true,
            PopupAction::None => {}
        }
    }

    fn submit_form(&mut self) {
        let mut event = SubmitEvent::new();
        let store = &mut self.store;
        let mut props = map_dispatch_to_props(|action| store.dispatch(action));
        self.home.on_submit(&mut event, |text| props.add_to_do(text));

        // Mirrors a browser form's default submit action; Home always prevents it.
        if !event.is_default_prevented() {
            self.focus = Focus::List;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        let store = &mut self.store;
        let mut props = map_dispatch_to_props(|action| store.dispatch(action));
        props.delete_to_do(id);
    }

    fn selected_item(&self) -> Option<&ToDoItem> {
        self.store.get_state().to_dos.get(self.selected_index)
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.store.get_state().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn sync_with_store(&mut self) {
        if !self.state_changed.replace(false) {
            return;
        }
        let len = self.store.get_state().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
        if self.detail.is_some() && self.detail_item().is_none() {
            self.detail = None;
        }
        tracing::trace!(items = len, selected = self.selected_index, "view synced with store");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

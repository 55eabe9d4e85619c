use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_form_key(key_event: KeyEvent) -> FormAction {
        // AltGr arrives as CONTROL | ALT on Windows and must still type.
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL)
            && !key_event.modifiers.contains(KeyModifiers::ALT);
        match key_event.code {
            KeyCode::Char('c') if ctrl => FormAction::Quit,
            KeyCode::Char('w') if ctrl => FormAction::Edit(FormEdit::DeleteWordBackward),
            KeyCode::Char(_) if ctrl => FormAction::None,
            KeyCode::Char(c) => FormAction::Edit(FormEdit::InsertChar(c)),
            KeyCode::Tab => FormAction::SwitchFocus,
            KeyCode::Esc => FormAction::Blur,
            KeyCode::Enter => FormAction::Submit,
            KeyCode::Backspace => FormAction::Edit(FormEdit::Backspace),
            KeyCode::Delete => FormAction::Edit(FormEdit::Delete),
            KeyCode::Left => FormAction::Edit(FormEdit::MoveCursorLeft),
            KeyCode::Right => FormAction::Edit(FormEdit::MoveCursorRight),
            KeyCode::Home => FormAction::Edit(FormEdit::MoveCursorHome),
            KeyCode::End => FormAction::Edit(FormEdit::MoveCursorEnd),
            _ => FormAction::None,
        }
    }

    pub fn handle_list_key(key_event: KeyEvent) -> ListAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListAction::Quit
            }
            KeyCode::Char('q') => ListAction::Quit,
            KeyCode::Tab => ListAction::SwitchFocus,
            KeyCode::Char('i') => ListAction::FocusForm,
            KeyCode::Up | KeyCode::Char('k') => ListAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => ListAction::MoveSelectionDown,
            KeyCode::Char('d') => ListAction::DeleteSelected,
            KeyCode::Enter => ListAction::ShowDetail,
            KeyCode::Char('?') => ListAction::ShowHelp,
            _ => ListAction::None,
        }
    }

    pub fn handle_help_key(key_event: KeyEvent) -> PopupAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                PopupAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => PopupAction::Close,
            _ => PopupAction::None,
        }
    }

    pub fn handle_detail_key(key_event: KeyEvent) -> PopupAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                PopupAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => PopupAction::Close,
            _ => PopupAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEdit {
    InsertChar(char),
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
}

#[derive(Debug, PartialEq)]
pub enum FormAction {
    None,
    Quit,
    SwitchFocus,
    Blur,
    Submit,
    Edit(FormEdit),
}

#[derive(Debug, PartialEq)]
pub enum ListAction {
    None,
    Quit,
    SwitchFocus,
    FocusForm,
    MoveSelectionUp,
    MoveSelectionDown,
    DeleteSelected,
    ShowDetail,
    ShowHelp,
}

#[derive(Debug, PartialEq)]
pub enum PopupAction {
    None,
    Close,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_form_keys_type_text() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(
            KeyHandler::handle_form_key(key_event),
            FormAction::Edit(FormEdit::InsertChar('q'))
        );

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(
            KeyHandler::handle_form_key(key_event),
            FormAction::Edit(FormEdit::InsertChar(' '))
        );

        let mut key_event = KeyEvent::from(KeyCode::Char('M'));
        key_event.modifiers = KeyModifiers::SHIFT;
        assert_eq!(
            KeyHandler::handle_form_key(key_event),
            FormAction::Edit(FormEdit::InsertChar('M'))
        );
    }

    #[test]
    fn test_form_control_keys() {
        assert_eq!(KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Esc)), FormAction::Blur);
        assert_eq!(KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Tab)), FormAction::SwitchFocus);
        assert_eq!(KeyHandler::handle_form_key(ctrl('c')), FormAction::Quit);
        assert_eq!(
            KeyHandler::handle_form_key(ctrl('w')),
            FormAction::Edit(FormEdit::DeleteWordBackward)
        );
        assert_eq!(KeyHandler::handle_form_key(ctrl('x')), FormAction::None);
    }

    #[test]
    fn test_form_altgr_characters_are_typed() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::new(KeyCode::Char('@'), altgr)),
            FormAction::Edit(FormEdit::InsertChar('@'))
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::new(KeyCode::Char('{'), altgr)),
            FormAction::Edit(FormEdit::InsertChar('{'))
        );
    }

    #[test]
    fn test_form_cursor_keys() {
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Backspace)),
            FormAction::Edit(FormEdit::Backspace)
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Delete)),
            FormAction::Edit(FormEdit::Delete)
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Left)),
            FormAction::Edit(FormEdit::MoveCursorLeft)
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Right)),
            FormAction::Edit(FormEdit::MoveCursorRight)
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::Home)),
            FormAction::Edit(FormEdit::MoveCursorHome)
        );
        assert_eq!(
            KeyHandler::handle_form_key(KeyEvent::from(KeyCode::End)),
            FormAction::Edit(FormEdit::MoveCursorEnd)
        );
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('q'))), ListAction::Quit);
        assert_eq!(KeyHandler::handle_list_key(ctrl('c')), ListAction::Quit);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Up)), ListAction::MoveSelectionUp);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('k'))), ListAction::MoveSelectionUp);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Down)), ListAction::MoveSelectionDown);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('j'))), ListAction::MoveSelectionDown);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('d'))), ListAction::DeleteSelected);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Enter)), ListAction::ShowDetail);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('i'))), ListAction::FocusForm);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Tab)), ListAction::SwitchFocus);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('?'))), ListAction::ShowHelp);
        assert_eq!(KeyHandler::handle_list_key(KeyEvent::from(KeyCode::Char('x'))), ListAction::None);
    }

    #[test]
    fn test_popup_keys() {
        assert_eq!(KeyHandler::handle_help_key(KeyEvent::from(KeyCode::Esc)), PopupAction::Close);
        assert_eq!(KeyHandler::handle_help_key(KeyEvent::from(KeyCode::Char('?'))), PopupAction::Close);
        assert_eq!(KeyHandler::handle_help_key(KeyEvent::from(KeyCode::Enter)), PopupAction::None);
        assert_eq!(KeyHandler::handle_detail_key(KeyEvent::from(KeyCode::Enter)), PopupAction::Close);
        assert_eq!(KeyHandler::handle_detail_key(KeyEvent::from(KeyCode::Char('q'))), PopupAction::Close);
        assert_eq!(KeyHandler::handle_detail_key(ctrl('c')), PopupAction::Quit);
    }
}

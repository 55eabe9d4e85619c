use crate::tui::handlers::FormEdit;

/// Cursor bookkeeping for a controlled text field.
///
/// The field never owns its value: every edit reads the value the owning
/// component currently holds and returns the new value, which the owner
/// then stores through its change handler. The cursor is a byte offset and
/// is clamped whenever the value changed underneath it (for example after a
/// submit reset it to the empty string).
#[derive(Debug, Default)]
pub struct TextInput {
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn cursor(&self, value: &str) -> usize {
        clamp_cursor(value, self.cursor)
    }

    /// Applies an edit. Returns the new value when the text changed, `None`
    /// when only the cursor moved.
    pub fn apply(&mut self, value: &str, edit: FormEdit) -> Option<String> {
        let cursor = self.cursor(value);
        self.cursor = cursor;

        match edit {
            FormEdit::InsertChar(c) => {
                let mut next = value.to_string();
                next.insert(cursor, c);
                self.cursor = cursor + c.len_utf8();
                Some(next)
            }
            FormEdit::Backspace => {
                if cursor == 0 {
                    return None;
                }
                let start = previous_boundary(value, cursor);
                self.cursor = start;
                Some(remove_range(value, start, cursor))
            }
            FormEdit::Delete => {
                if cursor >= value.len() {
                    return None;
                }
                let end = next_boundary(value, cursor);
                Some(remove_range(value, cursor, end))
            }
            FormEdit::DeleteWordBackward => {
                if cursor == 0 {
                    return None;
                }
                let start = word_start(value, cursor);
                self.cursor = start;
                Some(remove_range(value, start, cursor))
            }
            FormEdit::MoveCursorLeft => {
                self.cursor = previous_boundary(value, cursor);
                None
            }
            FormEdit::MoveCursorRight => {
                self.cursor = next_boundary(value, cursor);
                None
            }
            FormEdit::MoveCursorHome => {
                self.cursor = 0;
                None
            }
            FormEdit::MoveCursorEnd => {
                self.cursor = value.len();
                None
            }
        }
    }
}

fn clamp_cursor(value: &str, cursor: usize) -> usize {
    if cursor > value.len() || !value.is_char_boundary(cursor) {
        value.len()
    } else {
        cursor
    }
}

fn previous_boundary(value: &str, cursor: usize) -> usize {
    value[..cursor]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(value: &str, cursor: usize) -> usize {
    value[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}

// Trailing whitespace before the cursor is consumed together with the word.
fn word_start(value: &str, cursor: usize) -> usize {
    let trimmed = value[..cursor].trim_end();
    trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

fn remove_range(value: &str, start: usize, end: usize) -> String {
    let mut next = String::with_capacity(value.len() - (end - start));
    next.push_str(&value[..start]);
    next.push_str(&value[end..]);
    next
}

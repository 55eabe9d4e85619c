use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the to-do list, built from the fields of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToDo<'a> {
    pub id: u64,
    pub text: &'a str,
}

impl<'a> ToDo<'a> {
    pub fn new(id: u64, text: &'a str) -> Self {
        Self { id, text }
    }

    pub fn to_list_item(&self) -> ListItem<'a> {
        let text = if self.text.is_empty() {
            Span::styled(
                "(empty)",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.text, Style::default().fg(Color::White))
        };
        let id = Span::styled(format!(" #{}", self.id), Style::default().fg(Color::DarkGray));

        ListItem::new(Line::from(vec![Span::raw("• "), text, id]))
    }
}

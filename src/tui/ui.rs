use crate::tui::app::{App, Focus};
use crate::tui::home::Home;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Form
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_form(frame, chunks[1], app);
    draw_todo_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if let Some(item) = app.detail_item() {
        let text = vec![
            Line::from(vec![
                Span::styled("Id:   ", Style::default().fg(Color::Yellow)),
                Span::raw(item.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Text: ", Style::default().fg(Color::Yellow)),
                Span::raw(item.text.clone()),
            ]),
        ];
        draw_popup(frame, " To Do ", text, 60, 30);
    }

    if app.help_mode {
        let text = HELP_TEXT.iter().map(|line| Line::from(*line)).collect();
        draw_popup(frame, " Help - Keyboard Commands ", text, 80, 70);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("To Do")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Form;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = app.input_text();
    let inner_width = usize::from(area.width.saturating_sub(2));
    let before_width = Span::raw(&text[..app.input_cursor()]).width();
    let (scroll, cursor_column) = form_scroll(before_width, inner_width);

    let input = Paragraph::new(text)
        .scroll((0, scroll))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New to-do (Enter: Add) ")
                .border_style(border_style),
        );
    frame.render_widget(input, area);

    if focused && !app.help_mode && app.detail.is_none() {
        let column = u16::try_from(cursor_column).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(column);
        frame.set_cursor(x.min(area.right().saturating_sub(2)), area.y.saturating_add(1));
    }
}

/// Horizontal scroll for the form field and the cursor column inside it,
/// keeping the cursor on the last visible cell once the text before it
/// outgrows the field.
fn form_scroll(before_width: usize, inner_width: usize) -> (u16, usize) {
    let overflow = before_width.saturating_add(1).saturating_sub(inner_width);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    (scroll, before_width.saturating_sub(usize::from(scroll)))
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    let props = app.state_props();
    let items: Vec<ListItem> = Home::render_list(&props)
        .iter()
        .map(|to_do| to_do.to_list_item())
        .collect();

    let focused = app.focus == Focus::List;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Items ")
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if focused && !props.to_dos.is_empty() {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match app.focus {
        Focus::Form => format!(
            "Items: {} | Enter: add | Tab/Esc: list | Ctrl+C: quit",
            app.state_props().to_dos.len()
        ),
        Focus::List => format!(
            "Items: {} | ↑↓/j/k: navigate | d: delete | Enter: details | i/Tab: form | ?: help | q: quit",
            app.state_props().to_dos.len()
        ),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_popup(frame: &mut Frame, title: &str, text: Vec<Line>, percent_x: u16, percent_y: u16) {
    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let area = centered_rect(percent_x, percent_y, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

const HELP_TEXT: &[&str] = &[
    "FORM:",
    "  type              Edit the new to-do",
    "  ←→ / Home/End     Move the cursor",
    "  Ctrl+W            Delete the previous word",
    "  Enter             Add the to-do",
    "  Esc / Tab         Focus the list",
    "",
    "LIST:",
    "  ↑↓ / j/k          Navigate up/down",
    "  d                 Delete the selected to-do",
    "  Enter             Show details",
    "  i / Tab           Focus the form",
    "",
    "OTHER:",
    "  ?                 Show this help",
    "  q                 Quit (from the list)",
    "  Ctrl+C            Quit",
    "",
    "Press ? or Esc to close this help window",
];

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::container::Store;
    use crate::store::models::{AppState, ToDoItem};
    use crate::store::reducer::ToDoReducer;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw_to_backend(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn render(app: &App) -> String {
        draw_to_backend(app)
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn row(terminal: &Terminal<TestBackend>, y: usize) -> String {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer.content[y * width..(y + 1) * width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key_event(KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
    }

    fn alphabet(len: usize) -> String {
        (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
    }

    // Form text sits on row 5 of a 100x24 screen, columns 2..=97.
    const FORM_ROW: usize = 5;

    #[test]
    fn test_draw_renders_items() {
        let state = AppState::with_items(vec![
            ToDoItem::new(2, "Walk dog".to_string()),
            ToDoItem::new(1, "Buy milk".to_string()),
        ]);
        let app = App::new(Store::new(state, ToDoReducer::default()));
        let screen = render(&app);

        assert!(screen.contains("To Do"));
        assert!(screen.contains("Walk dog #2"));
        assert!(screen.contains("Buy milk #1"));
        assert!(screen.contains("Items: 2"));
    }

    #[test]
    fn test_draw_empty_item_placeholder() {
        let state = AppState::with_items(vec![ToDoItem::new(1, String::new())]);
        let app = App::new(Store::new(state, ToDoReducer::default()));

        assert!(render(&app).contains("(empty) #1"));
    }

    #[test]
    fn test_form_cursor_uses_display_width() {
        let mut app = App::new(Store::new(AppState::new(), ToDoReducer::default()));
        type_str(&mut app, "☕☕☕");

        let mut terminal = draw_to_backend(&app);
        assert_eq!(terminal.get_cursor().unwrap(), (8, 5));
        assert!(row(&terminal, FORM_ROW).contains('☕'));
    }

    #[test]
    fn test_form_scrolls_to_keep_typed_tail_visible() {
        let mut app = App::new(Store::new(AppState::new(), ToDoReducer::default()));
        type_str(&mut app, &alphabet(150));

        let mut terminal = draw_to_backend(&app);
        let form = row(&terminal, FORM_ROW);
        assert!(form.contains("klmnopqrst"));
        assert!(form.contains("│defgh"));
        assert_eq!(terminal.get_cursor().unwrap(), (97, 5));
    }

    #[test]
    fn test_form_scrolls_back_when_cursor_moves_home() {
        let mut app = App::new(Store::new(AppState::new(), ToDoReducer::default()));
        type_str(&mut app, &alphabet(150));
        app.handle_key_event(KeyEvent::from(KeyCode::Home)).unwrap();

        let mut terminal = draw_to_backend(&app);
        assert!(row(&terminal, FORM_ROW).contains("│abcdefghij"));
        assert_eq!(terminal.get_cursor().unwrap(), (2, 5));
    }

    #[test]
    fn test_form_draws_very_long_input() {
        let mut app = App::new(Store::new(AppState::new(), ToDoReducer::default()));
        type_str(&mut app, &"a".repeat(65_534));

        let mut terminal = draw_to_backend(&app);
        assert_eq!(terminal.get_cursor().unwrap(), (97, 5));
        assert!(row(&terminal, FORM_ROW).contains(&"a".repeat(95)));
    }

    #[test]
    fn test_form_scroll_bounds() {
        assert_eq!(form_scroll(0, 96), (0, 0));
        assert_eq!(form_scroll(95, 96), (0, 95));
        assert_eq!(form_scroll(96, 96), (1, 95));
        assert_eq!(form_scroll(5, 0), (6, 0));
        assert_eq!(form_scroll(usize::MAX - 1, 96), (u16::MAX, usize::MAX - 1 - 65_535));
    }
}

//! Input line
//!
//! Displays the shell-style prompt and the editor buffer with cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termchat_app::{App, Editor};

use super::color;

const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, editor: &Editor, area: Rect) {
    let accent = Style::default().fg(color(app.theme().accent));
    let text = Style::default().fg(color(app.theme().text));

    let username = app.user().map_or("guest", |user| user.username.as_str());
    let prompt = format!("{username}@system $ ");

    let line = Line::from(vec![
        Span::styled(prompt.clone(), accent),
        Span::styled(editor.buffer().to_owned(), text),
    ]);

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).style(text).block(block), area);

    // Cursor: border + prompt + characters left of the byte cursor.
    let prompt_width = prompt.chars().count() as u16;
    let cursor_chars = editor.buffer()[..editor.cursor()].chars().count() as u16;

    let available_width = area.width.saturating_sub(prompt_width + RIGHT_PADDING + 1);
    let cursor_offset = cursor_chars.min(available_width);

    let cursor_x = area.x.saturating_add(1).saturating_add(prompt_width).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}

//! Header bar
//!
//! Shows who is logged in, the current room, and the connection indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use termchat_app::App;

use super::color;

/// Render the header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let accent = Style::default().fg(color(app.theme().accent));

    let username = app.user().map_or("guest", |user| user.username.as_str());
    let identity = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{username}@system"), accent.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" [{}]", app.room()), accent),
    ]);

    let indicator = if app.is_connected() {
        Line::from(Span::styled("● connected ", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled("○ disconnected ", Style::default().fg(Color::Red)))
    };

    frame.render_widget(
        Paragraph::new(identity).style(Style::default().bg(color(app.theme().background))),
        area,
    );
    frame.render_widget(Paragraph::new(indicator).alignment(Alignment::Right), area);
}

//! Status bar
//!
//! Displays connection state, current room, log counts, and input hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use termchat_app::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection = if app.is_connected() {
        Span::styled("Connected", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Disconnected", Style::default().fg(Color::Red))
    };

    let counts = format!(
        " | Room: #{} | Messages: {} | Drafts: {}",
        app.room(),
        app.messages().len(),
        app.drafts().len(),
    );
    let hints = " | figlet [msg] to send | plain text saves a draft | /help";

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection,
        Span::styled(counts, Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

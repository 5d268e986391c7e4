//! Playground panel
//!
//! Displays the current ASCII animation frame, centered.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use termchat_app::App;

use crate::Playground;

use super::color;

/// Render the playground panel.
pub fn render(frame: &mut Frame, app: &App, playground: &Playground, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Play Area ")
        .title_bottom(format!(" Current: {} ", playground.animation()))
        .style(Style::default().fg(color(app.theme().text)));

    // Rough vertical centering inside the bordered area.
    let frame_height = playground.current_frame().lines().count() as u16;
    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(frame_height) / 2;
    let padded = format!("{}{}", "\n".repeat(top_padding as usize), playground.current_frame());

    let paragraph = Paragraph::new(padded).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}

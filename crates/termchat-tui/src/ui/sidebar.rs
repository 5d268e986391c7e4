//! Chat sidebar
//!
//! Displays the message log or the draft list, depending on the current
//! view. Both logs render bottom-anchored: when content overflows, the
//! newest entries stay visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use termchat_app::{App, View};
use termchat_core::Message;

use super::color;

const BORDER_SIZE: u16 = 2;
/// Every entry renders as two lines (metadata + content).
const LINES_PER_ENTRY: usize = 2;

/// Render the sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.view() {
        View::Chat => " [c] chat ",
        View::Draft => " [d] draft ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color(app.theme().text)));

    let items = match app.view() {
        View::Chat => message_items(app),
        View::Draft => draft_items(app),
    };

    let visible_entries = (area.height.saturating_sub(BORDER_SIZE) as usize) / LINES_PER_ENTRY;
    let skip = items.len().saturating_sub(visible_entries.max(1));
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn message_items(app: &App) -> Vec<ListItem<'_>> {
    let accent = Style::default().fg(color(app.theme().accent));

    app.messages().iter().map(|message| message_item(message, accent)).collect()
}

fn message_item(message: &Message, accent: Style) -> ListItem<'_> {
    let stamp = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    let meta = Line::from(Span::styled(format!("[{stamp}] {}:", message.sender), accent));

    // The ASCII renderer is a display concern; flagged messages just get
    // emphasis here.
    let content = if message.is_ascii {
        Line::from(Span::styled(
            message.content.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(message.content.as_str())
    };

    ListItem::new(vec![meta, content])
}

fn draft_items(app: &App) -> Vec<ListItem<'_>> {
    let accent = Style::default().fg(color(app.theme().accent));

    if app.drafts().is_empty() {
        return vec![
            ListItem::new(Line::from(Span::styled("No draft messages", accent))),
            ListItem::new(Line::from(Span::styled(
                "Tip: Type messages without 'figlet' prefix to save as drafts",
                accent.add_modifier(Modifier::DIM),
            ))),
        ];
    }

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!("Draft Messages ({}):", app.drafts().len()),
        accent,
    )))];
    items.extend(app.drafts().iter().enumerate().map(|(index, draft)| {
        ListItem::new(vec![
            Line::from(Span::styled(format!("Draft #{}", index + 1), accent)),
            Line::from(draft.as_str()),
        ])
    }));
    items
}

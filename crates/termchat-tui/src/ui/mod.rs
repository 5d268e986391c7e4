//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees. Colors come from the active theme's registry
//! entry.

mod header;
mod input;
mod playpen;
mod sidebar;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use termchat_app::{App, Editor};

use crate::Playground;

/// Convert a registry RGB triple into a terminal color.
pub(crate) fn color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, editor: &Editor, playground: &Playground) {
    const HEADER_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, *header_area);
    render_main_area(frame, app, playground, *main_area);
    input::render(frame, app, editor, *input_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (chat/draft sidebar + playground).
fn render_main_area(frame: &mut Frame, app: &App, playground: &Playground, area: Rect) {
    const SIDEBAR_WIDTH: u16 = 36;
    const PLAYGROUND_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(PLAYGROUND_MIN_WIDTH)])
        .split(area);

    let [sidebar_area, playground_area] = chunks.as_ref() else {
        return;
    };

    sidebar::render(frame, app, *sidebar_area);
    playpen::render(frame, app, playground, *playground_area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use termchat_core::User;

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content.iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.login(User::named("tester"));
        app
    }

    #[test]
    fn full_render_shows_user_room_and_playarea() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let editor = Editor::new();
        let playground = Playground::new();

        terminal.draw(|frame| render(frame, &app, &editor, &playground)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("tester@system"));
        assert!(text.contains("general"));
        assert!(text.contains("Play Area"));
        assert!(text.contains("disconnected"));
    }

    #[test]
    fn draft_view_renders_draft_list() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.submit("remember the milk");
        app.submit("/draft");
        let editor = Editor::new();
        let playground = Playground::new();

        terminal.draw(|frame| render(frame, &app, &editor, &playground)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Draft Messages (1)"));
        assert!(text.contains("remember the milk"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(5, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let editor = Editor::new();
        let playground = Playground::new();

        terminal.draw(|frame| render(frame, &app, &editor, &playground)).unwrap();
    }
}

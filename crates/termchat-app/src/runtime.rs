//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: view controller and command interpreter
//! - [`Editor`]: command-line input state
//! - [`Driver`]: platform-specific I/O
//!
//! All state mutation is serialized through this single loop: one event is
//! processed to completion before the next is polled, which is what makes
//! the append-only logs safe without any locking.

use termchat_core::{ChannelEvent, User};

use crate::{App, AppAction, AppEvent, Driver, Editor};

/// Generic runtime that orchestrates App, Editor, and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    editor: Editor,
    /// Connection signal observed last cycle, for edge detection.
    was_connected: bool,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime. The session user is generated at startup.
    pub fn new(driver: D) -> Self {
        Self::with_user(driver, User::generate())
    }

    /// Create a new runtime with a specific session user.
    pub fn with_user(driver: D, user: User) -> Self {
        let mut app = App::new();
        app.login(user);
        Self { driver, app, editor: Editor::new(), was_connected: false }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Polls for input events from the driver
    /// 2. Executes the resulting actions (render, publish, animate)
    /// 3. Surfaces channel connection edges to the app
    /// 4. Drains inbound channel events into the app
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app, &self.editor)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app, &mut self.editor).await?;
        if self.process_actions(actions).await? {
            return Ok(true);
        }

        let connected = self.driver.is_connected();
        if connected != self.was_connected {
            self.was_connected = connected;
            let edge = if connected { AppEvent::ChannelUp } else { AppEvent::ChannelDown };
            let actions = self.app.handle(edge);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        while let Some(event) = self.driver.recv_channel().await {
            let event = match event {
                ChannelEvent::Message { message } => AppEvent::MessageReceived { message },
                ChannelEvent::UserJoined { user } => {
                    AppEvent::UserJoined { username: user.username }
                },
            };
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Execute actions produced by the App or the editor.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app, &self.editor)?,
                AppAction::Quit => return Ok(true),
                AppAction::Publish { message } => {
                    // Fire-and-forget: a failed emit is logged and dropped.
                    if let Err(e) = self.driver.publish(message).await {
                        tracing::warn!("publish failed: {e}");
                    }
                },
                AppAction::Animate { animation } => self.driver.trigger_animation(animation),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }
}

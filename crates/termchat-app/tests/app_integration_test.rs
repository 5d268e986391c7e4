//! Integration tests for App, Editor, and Runtime behavior.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - App state reflects the expected view/room/theme
//! - The message and draft logs grew by exactly the expected entries
//! - Channel emissions and animation triggers match the command table

use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use termchat_app::{App, AppAction, AppEvent, Driver, Editor, KeyInput, Runtime, View};
use termchat_core::{Animation, ChannelEvent, Message, MessageChannel, MockChannel, User};

/// Create an App with a started session.
fn logged_in_app() -> App {
    let mut app = App::new();
    app.login(User::named("tester"));
    app
}

/// Submit a line and route `Publish`/`Animate` effects to the given channel,
/// collecting triggered animations.
fn submit_through(
    app: &mut App,
    channel: &mut MockChannel,
    animations: &mut Vec<Animation>,
    line: &str,
) {
    for action in app.submit(line) {
        match action {
            AppAction::Publish { message } => {
                let _ = channel.emit(ChannelEvent::Message { message });
            },
            AppAction::Animate { animation } => animations.push(animation),
            AppAction::Render | AppAction::Quit => {},
        }
    }
}

/// Contents of every emitted chat message, in emission order.
fn emitted_contents(channel: &MockChannel) -> Vec<String> {
    channel
        .sent()
        .iter()
        .filter_map(|event| match event {
            ChannelEvent::Message { message } => Some(message.content.clone()),
            ChannelEvent::UserJoined { .. } => None,
        })
        .collect()
}

#[test]
fn plain_text_grows_drafts_by_exactly_one() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    let drafts_before = app.drafts().len();
    let messages_before = app.messages().len();

    submit_through(&mut app, &mut channel, &mut animations, "buy more coffee");

    // Oracle: one draft, one system confirmation, nothing on the wire.
    assert_eq!(app.drafts().len(), drafts_before + 1);
    assert_eq!(app.messages().len(), messages_before + 1);
    assert!(channel.sent().is_empty());
    assert!(animations.is_empty());
}

#[test]
fn prefix_and_slash_figlet_differ_only_in_ascii_flag() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    submit_through(&mut app, &mut channel, &mut animations, "figlet hello world");
    submit_through(&mut app, &mut channel, &mut animations, "/figlet hello world");

    assert_eq!(emitted_contents(&channel), ["hello world", "hello world"]);

    let sent: Vec<&Message> = app.messages().iter().filter(|m| !m.is_system()).collect();
    assert_eq!(sent.len(), 2);
    assert!(!sent[0].is_ascii, "prefix form sends a plain message");
    assert!(sent[1].is_ascii, "slash form sends an ascii message");
    assert_eq!(sent[0].sender, "tester");
}

#[test]
fn theme_command_flow() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    submit_through(&mut app, &mut channel, &mut animations, "/theme matrix");
    assert_eq!(app.theme().name, "matrix");

    submit_through(&mut app, &mut channel, &mut animations, "/theme amber");
    assert_eq!(app.theme().name, "amber");

    submit_through(&mut app, &mut channel, &mut animations, "/theme bogus");
    assert_eq!(app.theme().name, "amber", "unknown theme leaves the current one");
}

#[test]
fn view_and_room_command_flow() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    submit_through(&mut app, &mut channel, &mut animations, "/d");
    submit_through(&mut app, &mut channel, &mut animations, "/d");
    assert_eq!(app.view(), View::Chat, "double toggle returns to the start");

    submit_through(&mut app, &mut channel, &mut animations, "/c");
    assert_eq!(app.room(), "general");

    submit_through(&mut app, &mut channel, &mut animations, "/draft");
    submit_through(&mut app, &mut channel, &mut animations, "/c alice");
    assert_eq!(app.room(), "alice");
    assert_eq!(app.view(), View::Chat);
}

#[test]
fn animation_commands_reach_the_dispatcher() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    for line in ["/meow", "/nyan", "/fire", "/train"] {
        submit_through(&mut app, &mut channel, &mut animations, line);
    }

    assert_eq!(
        animations,
        [Animation::Cat, Animation::Nyan, Animation::Fire, Animation::Train]
    );
    assert!(channel.sent().is_empty(), "animations never touch the channel");
}

#[test]
fn local_and_inbound_messages_share_one_ordering() {
    let mut app = logged_in_app();
    let mut channel = MockChannel::new();
    let mut animations = Vec::new();

    submit_through(&mut app, &mut channel, &mut animations, "figlet first");
    app.handle(AppEvent::MessageReceived { message: Message::new("bob", "second", false) });
    submit_through(&mut app, &mut channel, &mut animations, "figlet third");
    app.handle(AppEvent::UserJoined { username: "carol".into() });

    let contents: Vec<_> = app.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "third", "carol joined the chat"]);
}

/// Effects recorded by the scripted driver, shared with the test body.
#[derive(Debug, Default)]
struct RecordedEffects {
    published: Vec<Message>,
    animations: Vec<Animation>,
    renders: usize,
    /// Whether any render observed the app as connected.
    saw_connected: bool,
    /// Message contents observed at the last render.
    last_contents: Vec<String>,
}

/// Deterministic driver that replays a script of events and records effects.
struct ScriptDriver {
    steps: VecDeque<AppEvent>,
    channel: MockChannel,
    effects: Arc<Mutex<RecordedEffects>>,
}

impl ScriptDriver {
    fn new(steps: Vec<AppEvent>, channel: MockChannel) -> (Self, Arc<Mutex<RecordedEffects>>) {
        let effects = Arc::new(Mutex::new(RecordedEffects::default()));
        (Self { steps: steps.into(), channel, effects: Arc::clone(&effects) }, effects)
    }

    fn record(&self, update: impl FnOnce(&mut RecordedEffects)) {
        if let Ok(mut effects) = self.effects.lock() {
            update(&mut effects);
        }
    }
}

impl Driver for ScriptDriver {
    type Error = Infallible;

    async fn poll_event(
        &mut self,
        app: &mut App,
        editor: &mut Editor,
    ) -> Result<Vec<AppAction>, Infallible> {
        match self.steps.pop_front() {
            Some(AppEvent::Key(key)) => Ok(editor.handle_key(key, app)),
            Some(event) => Ok(app.handle(event)),
            None => Ok(vec![AppAction::Quit]),
        }
    }

    async fn publish(&mut self, message: Message) -> Result<(), Infallible> {
        let _ = self.channel.emit(ChannelEvent::Message { message: message.clone() });
        self.record(|e| e.published.push(message));
        Ok(())
    }

    async fn recv_channel(&mut self) -> Option<ChannelEvent> {
        self.channel.poll()
    }

    fn trigger_animation(&mut self, animation: Animation) {
        self.record(|e| e.animations.push(animation));
    }

    fn is_connected(&self) -> bool {
        self.channel.is_connected()
    }

    fn render(&mut self, app: &App, _editor: &Editor) -> Result<(), Infallible> {
        let connected = app.is_connected();
        let contents: Vec<String> =
            app.messages().iter().map(|m| m.content.clone()).collect();
        self.record(|e| {
            e.renders += 1;
            e.saw_connected |= connected;
            e.last_contents = contents;
        });
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Turn a typed line into key events ending with Enter.
fn keys(line: &str) -> Vec<AppEvent> {
    line.chars()
        .map(|c| AppEvent::Key(KeyInput::Char(c)))
        .chain([AppEvent::Key(KeyInput::Enter)])
        .collect()
}

#[tokio::test]
async fn runtime_routes_typed_commands_to_effects() {
    let mut script = Vec::new();
    script.extend(keys("figlet over the wire"));
    script.extend(keys("/nyan"));

    let mut channel = MockChannel::new();
    channel.inject(ChannelEvent::Message { message: Message::new("bob", "inbound", false) });

    let (driver, effects) = ScriptDriver::new(script, channel);
    let runtime = Runtime::with_user(driver, User::named("tester"));
    runtime.run().await.unwrap();

    let effects = effects.lock().unwrap();
    assert_eq!(effects.published.len(), 1);
    assert_eq!(effects.published[0].content, "over the wire");
    assert_eq!(effects.animations, [Animation::Nyan]);
    assert!(effects.renders > 0);
}

#[tokio::test]
async fn runtime_surfaces_connection_edge_and_inbound_traffic() {
    let mut channel = MockChannel::new();
    channel.inject(ChannelEvent::UserJoined { user: User::named("peer") });

    let (driver, effects) = ScriptDriver::new(vec![AppEvent::Tick, AppEvent::Tick], channel);
    let runtime = Runtime::with_user(driver, User::named("tester"));
    runtime.run().await.unwrap();

    let effects = effects.lock().unwrap();
    assert!(effects.saw_connected, "connection edge should reach the app");
    assert!(
        effects.last_contents.iter().any(|c| c == "peer joined the chat"),
        "join notification should land as a system message"
    );
}

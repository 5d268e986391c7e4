//! Slash-command parsing.
//!
//! Turns the text after a leading `/` into a typed [`Command`]. Parsing is
//! purely lexical; dispatch and all state changes happen in
//! [`App::submit`](crate::App::submit).
//!
//! Matching is exact and case-sensitive: `/THEME` is an unknown command.

/// Command names offered by tab completion, in help order.
pub const COMMAND_NAMES: [&str; 13] = [
    "/figlet", "/d", "/c", "/meow", "/nyan", "/fire", "/train", "/help", "/themes", "/theme",
    "/join", "/draft", "/chat",
];

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/d` - toggle between chat and draft view.
    ToggleDraft,
    /// `/c [friend]` - open a friend's chat.
    OpenChat {
        /// Friend name. `None` when the argument is missing.
        friend: Option<String>,
    },
    /// `/figlet [words...]` - send an ASCII-art message.
    Figlet {
        /// Message words, joined with single spaces on dispatch.
        words: Vec<String>,
    },
    /// `/themes` - list registered themes.
    Themes,
    /// `/theme [name]` - switch theme.
    Theme {
        /// Theme name. `None` when the argument is missing.
        name: Option<String>,
    },
    /// `/join [room]` - join a chat room.
    Join {
        /// Room name. `None` when the argument is missing.
        room: Option<String>,
    },
    /// `/draft` - switch to the draft view.
    Draft,
    /// `/chat` - switch to the chat view.
    Chat,
    /// `/meow` - cat animation.
    Meow,
    /// `/nyan` - nyan cat animation.
    Nyan,
    /// `/fire` - fire animation.
    Fire,
    /// `/train` - train animation.
    Train,
    /// `/help` - show the command list.
    Help,
    /// Anything else.
    Unknown {
        /// The unrecognized command name.
        name: String,
    },
}

impl Command {
    /// Parse the text after the leading `/`.
    ///
    /// The first space-delimited token is the command name, the remaining
    /// non-empty tokens its arguments.
    pub fn parse(rest: &str) -> Self {
        let mut tokens = rest.split(' ').filter(|token| !token.is_empty());
        let name = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_owned).collect();

        match name {
            "d" => Command::ToggleDraft,
            "c" => Command::OpenChat { friend: args.into_iter().next() },
            "figlet" => Command::Figlet { words: args },
            "themes" => Command::Themes,
            "theme" => Command::Theme { name: args.into_iter().next() },
            "join" => Command::Join { room: args.into_iter().next() },
            "draft" => Command::Draft,
            "chat" => Command::Chat,
            "meow" => Command::Meow,
            "nyan" => Command::Nyan,
            "fire" => Command::Fire,
            "train" => Command::Train,
            "help" => Command::Help,
            other => Command::Unknown { name: other.to_owned() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("d"), Command::ToggleDraft);
        assert_eq!(Command::parse("themes"), Command::Themes);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn parses_arguments() {
        assert_eq!(Command::parse("c alice"), Command::OpenChat { friend: Some("alice".into()) });
        assert_eq!(Command::parse("c"), Command::OpenChat { friend: None });
        assert_eq!(
            Command::parse("figlet hello world"),
            Command::Figlet { words: vec!["hello".into(), "world".into()] }
        );
    }

    #[test]
    fn collapses_repeated_spaces() {
        assert_eq!(
            Command::parse("figlet hello   world"),
            Command::Figlet { words: vec!["hello".into(), "world".into()] }
        );
        assert_eq!(Command::parse("theme  matrix"), Command::Theme { name: Some("matrix".into()) });
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Command::parse("THEME matrix"), Command::Unknown { name: "THEME".into() });
        assert_eq!(Command::parse("Help"), Command::Unknown { name: "Help".into() });
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(Command::parse(""), Command::Unknown { name: String::new() });
    }
}

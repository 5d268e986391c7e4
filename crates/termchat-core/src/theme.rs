//! Terminal color themes.
//!
//! A closed registry of named themes. Themes are never mutated, only swapped
//! by reference; the registry's declaration order is the order `/themes`
//! reports.

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// Display attributes for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Registry name, as typed in `/theme <name>`.
    pub name: &'static str,
    /// Background fill.
    pub background: Rgb,
    /// Primary text color.
    pub text: Rgb,
    /// Accent color for headers and metadata.
    pub accent: Rgb,
}

/// Theme registry, in declaration order.
const THEMES: &[Theme] = &[
    Theme {
        name: "matrix",
        background: (0, 0, 0),
        text: (74, 222, 128),
        accent: (134, 239, 172),
    },
    Theme {
        name: "amber",
        background: (0, 0, 0),
        text: (251, 191, 36),
        accent: (252, 211, 77),
    },
    Theme {
        name: "cyan",
        background: (17, 24, 39),
        text: (34, 211, 238),
        accent: (103, 232, 249),
    },
    Theme {
        name: "white",
        background: (0, 0, 0),
        text: (255, 255, 255),
        accent: (209, 213, 219),
    },
];

/// Look up a theme by its exact name.
pub fn lookup_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.name == name)
}

/// All registered theme names, in declaration order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|theme| theme.name)
}

/// The theme active at session start.
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

//! Animation trigger vocabulary.
//!
//! The interpreter does not render animations; it emits one of these named
//! triggers and the playground renders independently.

use serde::{Deserialize, Serialize};

/// A named playground animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    /// Static ASCII cat.
    Cat,
    /// Flying nyan cat, 4 frames.
    Nyan,
    /// Burning fire, 8 frames.
    Fire,
    /// Moving train, 50 positions.
    Train,
}

impl Animation {
    /// Every animation, in trigger order.
    pub const ALL: [Animation; 4] = [Animation::Cat, Animation::Nyan, Animation::Fire, Animation::Train];

    /// Stable lowercase trigger name.
    pub fn name(self) -> &'static str {
        match self {
            Animation::Cat => "cat",
            Animation::Nyan => "nyan",
            Animation::Fire => "fire",
            Animation::Train => "train",
        }
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        let names: Vec<_> = Animation::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["cat", "nyan", "fire", "train"]);
    }
}

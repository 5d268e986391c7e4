//! ASCII-art animation playground.
//!
//! Holds the currently running animation and a frame counter advanced by the
//! driver's tick. The frame generators are pure: animation name + frame
//! counter in, text out. The interpreter never calls in here directly — it
//! emits typed triggers that the driver routes to [`Playground::trigger`].

use termchat_core::Animation;

/// Frame count of the nyan cat cycle.
const NYAN_FRAMES: usize = 4;
/// Frame count of the fire cycle.
const FIRE_FRAMES: usize = 8;
/// Positions the train travels before wrapping.
const TRAIN_POSITIONS: usize = 50;

/// Animation playground state.
#[derive(Debug)]
pub struct Playground {
    animation: Animation,
    frame: usize,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    /// Create a playground showing the welcome cat.
    pub fn new() -> Self {
        Self { animation: Animation::Cat, frame: 0 }
    }

    /// Currently running animation.
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Start an animation from its first frame.
    pub fn trigger(&mut self, animation: Animation) {
        self.animation = animation;
        self.frame = 0;
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Render the current frame.
    pub fn current_frame(&self) -> String {
        match self.animation {
            Animation::Cat => cat_frame(),
            Animation::Nyan => nyan_frame(self.frame % NYAN_FRAMES),
            Animation::Fire => fire_frame(self.frame % FIRE_FRAMES),
            Animation::Train => train_frame(self.frame % TRAIN_POSITIONS),
        }
    }
}

fn cat_frame() -> String {
    [" /\\_/\\", "( o.o )", " > ^ <"].join("\n")
}

fn nyan_frame(frame: usize) -> String {
    let trail: String =
        (0..12).map(|i| if (i + frame) % NYAN_FRAMES < 2 { '~' } else { '-' }).collect();
    let wave = if frame % 2 == 0 { "^" } else { "v" };
    format!("{trail},------,\n{trail}|   /\\_/\\\n{trail}|__( {wave}.{wave} )\n{trail}\"\"  \"\"")
}

fn fire_frame(frame: usize) -> String {
    // Deterministic flicker: each column peaks on a different frame.
    let tips: String =
        (0..10).map(|i| if (i * 3 + frame) % FIRE_FRAMES < 4 { ')' } else { '(' }).collect();
    let body: String =
        (0..10).map(|i| if (i * 5 + frame) % FIRE_FRAMES < 5 { '(' } else { ')' }).collect();
    format!("  {tips}\n {body})\n({body}(\n^^^^^^^^^^^^")
}

fn train_frame(position: usize) -> String {
    let lead = " ".repeat(position);
    format!(
        "{lead}     oooOOOOOOOOOOO\"\n{lead}    o   ____\n{lead}   Y_,_|[]| --++++++\n{lead}  {{|_|_|__|;|______|\n{lead} /oo--OO   oo    oo"
    )
}

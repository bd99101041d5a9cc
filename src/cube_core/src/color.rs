use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six sticker colors of the reference color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color `{0}`, expected one of white, yellow, red, orange, green, blue")]
pub struct ParseColorError(pub String);

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Single letter used by the net rendering.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts the full name or the initial, case insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| {
                color.name() == lowered
                    || (lowered.len() == 1
                        && lowered.starts_with(color.initial().to_ascii_lowercase()))
            })
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

/// The built-in swatch palette.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Black,
    Blue,
    Brown,
    Cyan,
    Green,
    Orange,
    Red,
    Purple,
    Yellow,
}

impl Swatch {
    pub const ALL: [Swatch; 9] = [
        Swatch::Black,
        Swatch::Blue,
        Swatch::Brown,
        Swatch::Cyan,
        Swatch::Green,
        Swatch::Orange,
        Swatch::Red,
        Swatch::Purple,
        Swatch::Yellow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Black => "black",
            Swatch::Blue => "blue",
            Swatch::Brown => "brown",
            Swatch::Cyan => "cyan",
            Swatch::Green => "green",
            Swatch::Orange => "orange",
            Swatch::Red => "red",
            Swatch::Purple => "purple",
            Swatch::Yellow => "yellow",
        }
    }

    /// sRGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Swatch::Black => (0x00, 0x00, 0x00),
            Swatch::Blue => (0x00, 0x00, 0xFF),
            Swatch::Brown => (0x99, 0x66, 0x33),
            Swatch::Cyan => (0x00, 0xFF, 0xFF),
            Swatch::Green => (0x00, 0xFF, 0x00),
            Swatch::Orange => (0xFF, 0x80, 0x00),
            Swatch::Red => (0xFF, 0x00, 0x00),
            Swatch::Purple => (0x80, 0x00, 0x80),
            Swatch::Yellow => (0xFF, 0xFF, 0x00),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a palette name (any case) or its `#RRGGBB` hex code.
impl FromStr for Swatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Swatch::ALL
            .into_iter()
            .find(|swatch| {
                swatch.name().eq_ignore_ascii_case(value) || swatch.hex().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| format!("unknown swatch '{value}'"))
    }
}

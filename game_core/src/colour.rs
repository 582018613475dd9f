//! Colour palette
//!
//! A closed set of named colours with conversions to the formats the
//! renderer and the log output need.

use std::fmt;

/// Output format for a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourFormat {
    Tuple,
    Hex,
}

impl ColourFormat {
    pub const ALL: [ColourFormat; 2] = [ColourFormat::Tuple, ColourFormat::Hex];

    pub fn name(&self) -> &'static str {
        match self {
            ColourFormat::Tuple => "TUPLE",
            ColourFormat::Hex => "HEX",
        }
    }
}

/// A colour rendered in a given [`ColourFormat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourValue {
    Rgb(u8, u8, u8),
    Hex(String),
}

impl fmt::Display for ColourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourValue::Rgb(r, g, b) => write!(f, "({}, {}, {})", r, g, b),
            ColourValue::Hex(hex) => f.write_str(hex),
        }
    }
}

/// Named colours used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colour {
    #[default]
    White,
    Black,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    pub fn name(&self) -> &'static str {
        match self {
            Colour::White => "WHITE",
            Colour::Black => "BLACK",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Colour::White => (255, 255, 255),
            Colour::Black => (0, 0, 0),
        }
    }

    /// Lower-case `#rrggbb`
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn format(&self, format: ColourFormat) -> ColourValue {
        match format {
            ColourFormat::Tuple => {
                let (r, g, b) = self.rgb();
                ColourValue::Rgb(r, g, b)
            }
            ColourFormat::Hex => ColourValue::Hex(self.hex()),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Colour theme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two colour schemes. Dark unless the user chose otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a stored theme value that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used when rendering a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub card_bg: Rgb,
    pub header_text: Rgb,
    pub label: Rgb,
    pub hint: Rgb,
    pub out_value: Rgb,
    pub button_bg: Rgb,
    /// Start and end of the primary button gradient.
    pub gradient: [Rgb; 2],
}

const DARK: Palette = Palette {
    background: Rgb(0x0b, 0x0d, 0x12),
    card_bg: Rgb(0x15, 0x18, 0x20),
    header_text: Rgb(0xf3, 0xf4, 0xf6),
    label: Rgb(0x9c, 0xa3, 0xaf),
    hint: Rgb(0x6b, 0x72, 0x80),
    out_value: Rgb(0xff, 0xff, 0xff),
    button_bg: Rgb(0x6d, 0x5f, 0xfd),
    gradient: [Rgb(0x56, 0x3f, 0xd9), Rgb(0x8b, 0x5c, 0xf6)],
};

const LIGHT: Palette = Palette {
    background: Rgb(0xf5, 0xf6, 0xf8),
    card_bg: Rgb(0xff, 0xff, 0xff),
    header_text: Rgb(0x0f, 0x11, 0x15),
    label: Rgb(0x4b, 0x55, 0x63),
    hint: Rgb(0x9c, 0xa3, 0xaf),
    out_value: Rgb(0x0f, 0x11, 0x15),
    button_bg: Rgb(0x0f, 0x11, 0x15),
    gradient: [Rgb(0x0f, 0x11, 0x15), Rgb(0x4b, 0x55, 0x63)],
};

//! Color palettes for the two theme modes.
//!
//! Every widget derives its colors from the active [`Palette`], so flipping
//! the mode restyles the whole application in one place.

use ratatui::style::Color;

use crate::config::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub ok: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x12, 0x12, 0x18),
    fg: Color::Rgb(0xe5, 0xe5, 0xe5),
    accent: Color::Rgb(0x7c, 0x9c, 0xff),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight_bg: Color::Rgb(0x26, 0x26, 0x32),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xfa, 0xfa, 0xf5),
    fg: Color::Rgb(0x20, 0x20, 0x28),
    accent: Color::Rgb(0x2b, 0x4f, 0xd8),
    muted: Color::Rgb(0x8a, 0x8f, 0x98),
    border: Color::Rgb(0xc8, 0xc8, 0xc0),
    highlight_bg: Color::Rgb(0xe6, 0xe8, 0xf5),
    ok: Color::Rgb(0x15, 0x80, 0x3d),
};

impl Palette {
    pub fn of(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

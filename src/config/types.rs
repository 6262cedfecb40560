use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// The only thing worth remembering between runs is the theme preference;
/// everything else about the portfolio is compile-time content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme to start with.
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Dark/light color scheme selector.
///
/// Light is the default; dark is an explicit preference, stored once the
/// user toggles it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the visitor's explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root for dark styles.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(String);

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Stored choice wins; anything missing or unreadable falls back to the OS preference.
pub fn resolve_theme(stored: &str, os_prefers_dark: bool) -> Theme {
    match stored.parse::<Theme>() {
        Ok(theme) => theme,
        Err(e) => {
            if !stored.is_empty() {
                log::debug!("ignoring stored theme: {e}");
            }
            if os_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// What the page shows. Before mount that is always [`Theme::Light`], the only
/// theme the server can know about; storage and the OS preference apply after.
pub fn displayed_theme(mounted: bool, stored: &str, os_prefers_dark: bool) -> Theme {
    if !mounted {
        return Theme::Light;
    }
    resolve_theme(stored, os_prefers_dark)
}

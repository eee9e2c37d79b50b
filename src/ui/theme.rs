use std::{fmt, str::FromStr};
use thiserror::Error;

/// Local storage key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    /// An explicit saved choice wins over the platform preference.
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Self {
        saved.unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }

    /// Resolves from the raw stored value. Empty or unrecognised values count as unset.
    pub fn from_stored(stored: &str, prefers_dark: bool) -> Self {
        Self::resolve(stored.parse().ok(), prefers_dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_choice_wins() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_falls_back_to_platform() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::from_stored("", true), Theme::Dark);
        assert_eq!(Theme::from_stored("sepia", false), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let initial = Theme::from_stored("", true);
        let mut stored = String::new();

        let mut theme = initial;
        for _ in 0..2 {
            theme = theme.toggled();
            stored = theme.to_string();
        }

        assert_eq!(theme, initial);
        assert_eq!(stored, "dark");
        assert_eq!(stored.parse::<Theme>(), Ok(theme));
        // the explicit choice now overrides a light platform preference
        assert_eq!(Theme::from_stored(&stored, false), Theme::Dark);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "blue".parse::<Theme>(),
            Err(ThemeParseError("blue".to_string()))
        );
    }
}

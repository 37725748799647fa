use serde::{Deserialize, Serialize};
use std::fmt;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: it shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "extra-moon",
            Theme::Dark => "extra-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner of the light/dark preference and its persistence.
///
/// `theme` returns `None` when the store is unavailable or holds no preference yet.
pub trait ThemeStore: Send + Sync {
    fn theme(&self) -> Option<Theme>;
    fn set_theme(&self, theme: Theme);
}

pub fn current_theme(store: &dyn ThemeStore) -> Theme {
    store.theme().unwrap_or_default()
}

/// Flips the stored preference and returns the new value.
pub fn toggle_theme(store: &dyn ThemeStore) -> Theme {
    let next = current_theme(store).toggled();
    store.set_theme(next);
    next
}

/// The theme that may be painted, or `None` before the first client render completed.
pub fn visible_theme(mounted: bool, store: &dyn ThemeStore) -> Option<Theme> {
    if mounted {
        Some(current_theme(store))
    } else {
        None
    }
}

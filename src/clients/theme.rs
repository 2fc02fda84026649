use anyhow::{Error, Result};
use tracing::debug;

use crate::{clients::storage::LocalStorage, models::session::Theme};

pub const THEME_KEY: &str = "bellory-admin-theme";

pub struct ThemeStore {
    storage: LocalStorage,
    theme: Theme,
}

impl ThemeStore {
    /// Stored choice first, then the OS preference.
    pub fn load(storage: LocalStorage, prefers_dark: bool) -> Result<Self, Error> {
        let stored = storage
            .get_item(THEME_KEY)?
            .and_then(|value| Theme::from_string(&value));

        let theme = match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        };

        debug!(theme = theme.as_str(), from_storage = stored.is_some(), "Theme loaded");

        Ok(Self { storage, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<(), Error> {
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Theme, Error> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

//! Light/dark display preference.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::storage::TabStorage;
use crate::error::Result;

/// Storage key holding the theme value.
pub const THEME_KEY: &str = "theme";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Reads and writes the profile-scoped theme key.
pub struct PreferenceStore {
    storage: Arc<dyn TabStorage>,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn TabStorage>) -> Self {
        Self { storage }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn theme(&self) -> Result<ThemePreference> {
        let raw = self.storage.get_item(THEME_KEY)?;
        Ok(raw
            .and_then(|value| ThemePreference::from_str(&value).ok())
            .unwrap_or_default())
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        self.storage.set_item(THEME_KEY, theme.as_ref())
    }

    pub fn set_dark(&self, dark: bool) -> Result<()> {
        self.set_theme(if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        })
    }
}

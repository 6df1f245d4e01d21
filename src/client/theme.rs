//! Light/dark color scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::BrandConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow `prefers-color-scheme`
    #[default]
    System,
}

impl ThemeMode {
    /// The header toggle: light goes dark, anything else goes light
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Icon shown on the toggle button for this mode
    pub fn toggle_icon(self, brand: &BrandConfig) -> &str {
        match self {
            ThemeMode::Light => &brand.light_toggle_icon,
            ThemeMode::Dark | ThemeMode::System => &brand.dark_toggle_icon,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "" => Ok(ThemeMode::System),
            other => anyhow::bail!("Unknown theme `{}`. Available: light, dark, system", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_icon() {
        let brand = BrandConfig::default();
        assert_eq!(ThemeMode::Light.toggle_icon(&brand), "/light-toggle.svg");
        assert_eq!(ThemeMode::Dark.toggle_icon(&brand), "/dark-toggle.svg");
        assert_eq!(ThemeMode::System.toggle_icon(&brand), "/dark-toggle.svg");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}

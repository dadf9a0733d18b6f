//! Narrator configuration.

use std::str::FromStr;

use crate::error::EngineError;

/// Language of the phrase catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Japanese, as the character speaks natively.
    #[default]
    Japanese,
    /// English renderings of the same phrases.
    English,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Japanese => write!(f, "ja"),
            Self::English => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Self::Japanese),
            "en" | "en-us" | "english" => Ok(Self::English),
            other => Err(EngineError::UnknownLocale(other.to_string())),
        }
    }
}

/// Configuration for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Language phrases are rendered in.
    pub locale: Locale,
    /// When `false` the narrator is never called.
    pub enabled: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            enabled: true,
        }
    }
}

impl NarratorConfig {
    /// Create a narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Turn narration on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NarratorConfig::new();
        assert_eq!(config.locale, Locale::Japanese);
        assert!(config.enabled);
    }

    #[test]
    fn builder_chain() {
        let config = NarratorConfig::new()
            .with_locale(Locale::English)
            .with_enabled(false);
        assert_eq!(config.locale, Locale::English);
        assert!(!config.enabled);
    }

    #[test]
    fn parse_locale() {
        assert_eq!("JA".parse::<Locale>(), Ok(Locale::Japanese));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(EngineError::UnknownLocale("fr".into()))
        );
    }
}

//! Built-in languages

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Languages with embedded pattern data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Knuth-Liang TeX patterns plus the ushyphmax extension
    #[default]
    English,
    /// Russian patterns and exceptions
    Russian,
    /// Afrikaans patterns
    Afrikaans,
}

impl Language {
    /// Every built-in language
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Russian, Language::Afrikaans]
    }

    /// Resolve a language code.
    ///
    /// Accepts two- and three-letter codes and English names in any case.
    /// A region suffix such as `en-US` or `ru_RU` is ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "en" | "eng" | "english" => Some(Language::English),
            "ru" | "rus" | "russian" => Some(Language::Russian),
            "af" | "afr" | "afrikaans" => Some(Language::Afrikaans),
            _ => None,
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Afrikaans => "af",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Afrikaans => "Afrikaans",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

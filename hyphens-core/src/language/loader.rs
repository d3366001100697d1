//! Language data loader
//!
//! Manages the embedded language configurations and caches compiled
//! hyphenators so each built-in language is compiled at most once.

use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::hyphenator::Hyphenator;
use crate::language::{builtin::Language, config::LanguageConfig};

static ENGLISH: OnceLock<Arc<Hyphenator>> = OnceLock::new();
static RUSSIAN: OnceLock<Arc<Hyphenator>> = OnceLock::new();
static AFRIKAANS: OnceLock<Arc<Hyphenator>> = OnceLock::new();

/// Separator for combining languages in one code, e.g. `en+ru`
const LANGUAGE_JOINER: char = '+';

impl Language {
    /// Embedded TOML source for this language
    pub fn config_source(&self) -> &'static str {
        match self {
            Language::English => include_str!("../../configs/languages/english.toml"),
            Language::Russian => include_str!("../../configs/languages/russian.toml"),
            Language::Afrikaans => include_str!("../../configs/languages/afrikaans.toml"),
        }
    }

    /// Parse the embedded configuration
    pub fn config(&self) -> Result<LanguageConfig> {
        LanguageConfig::from_toml_str(self.config_source())
    }

    fn cache(&self) -> &'static OnceLock<Arc<Hyphenator>> {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
            Language::Afrikaans => &AFRIKAANS,
        }
    }

    /// Shared hyphenator for this language, compiled on first use
    pub fn hyphenator(&self) -> Result<Arc<Hyphenator>> {
        let cache = self.cache();
        if let Some(hyphenator) = cache.get() {
            return Ok(Arc::clone(hyphenator));
        }

        let config = self.config()?;
        let compiled = Arc::new(Hyphenator::builder().language(&config).build());
        log::info!("compiled built-in {} hyphenation patterns", self.name());

        Ok(Arc::clone(cache.get_or_init(|| compiled)))
    }
}

/// Load a hyphenator by language code.
///
/// Several codes joined with `+` (for example `en+ru`) are merged into one
/// hyphenator, with later languages winning on identical patterns. Merged
/// hyphenators are compiled fresh on every call.
pub fn get_hyphenator(code: &str) -> Result<Arc<Hyphenator>> {
    let languages = code
        .split(LANGUAGE_JOINER)
        .map(|part| part.parse::<Language>())
        .collect::<Result<Vec<_>>>()?;

    match languages.as_slice() {
        [] => Err(Error::UnknownLanguage(code.to_string())),
        [language] => language.hyphenator(),
        _ => {
            let mut builder = Hyphenator::builder();
            for language in &languages {
                builder = builder.language(&language.config()?);
            }
            log::info!("compiled merged hyphenation patterns for {code}");
            Ok(Arc::new(builder.build()))
        }
    }
}

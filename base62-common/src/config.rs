use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, convert::TryFrom};

pub type LanguageTranslations = HashMap<String, HashMap<String, String>>;

/// Initial values of the generator form
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FormDefaults {
    pub length: usize,
    pub prefix: String,
    pub count: usize,
    pub quotes: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            length: 8,
            prefix: String::new(),
            count: 1,
            quotes: true,
        }
    }
}

/// Upper bounds applied to form input
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct Limits {
    max_length: usize,
    max_count: usize,
    max_prefix_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_length: 100,
            max_count: 1000,
            max_prefix_length: 256,
        }
    }
}

impl Limits {
    pub fn new(max_length: usize, max_count: usize, max_prefix_length: usize) -> Self {
        Limits {
            max_length,
            max_count,
            max_prefix_length,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn max_prefix_length(&self) -> usize {
        self.max_prefix_length
    }
}

/// Configuration parameters as read directly from Rocket.toml / environment.
#[derive(Deserialize, Debug)]
pub struct RawConfig {
    /// Default locale
    default_locale: String,
    /// Translations indexed by locale
    translations: LanguageTranslations,
    /// Initial form values
    #[serde(default)]
    defaults: FormDefaults,
    /// Form input caps
    #[serde(default)]
    limits: Limits,
    /// Additional stylesheet included in every page
    custom_css: Option<String>,
    /// Canonical URL of the page
    site_url: Option<String>,
}

/// configuration container for the generator service
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    pub default_locale: String,
    pub translations: LanguageTranslations,
    pub defaults: FormDefaults,
    pub limits: Limits,
    pub custom_css: Option<String>,
    pub site_url: Option<String>,
}

// This tryfrom can be removed once try_from for fields lands in serde
impl TryFrom<RawConfig> for Config {
    type Error = Error;
    fn try_from(raw_config: RawConfig) -> Result<Config, Error> {
        if !raw_config
            .translations
            .contains_key(&raw_config.default_locale)
        {
            return Err(Error::Config(format!(
                "no translations for default locale '{}'",
                raw_config.default_locale
            )));
        }

        let limits = raw_config.limits;
        if limits.max_length == 0 || limits.max_count == 0 {
            return Err(Error::Config("limits must be at least 1".to_owned()));
        }

        let defaults = raw_config.defaults;
        if !(1..=limits.max_length).contains(&defaults.length) {
            return Err(Error::Config(format!(
                "default length must be between 1 and {}",
                limits.max_length
            )));
        }
        if !(1..=limits.max_count).contains(&defaults.count) {
            return Err(Error::Config(format!(
                "default count must be between 1 and {}",
                limits.max_count
            )));
        }
        if defaults.prefix.len() > limits.max_prefix_length {
            return Err(Error::Config(format!(
                "default prefix must be at most {} bytes",
                limits.max_prefix_length
            )));
        }

        Ok(Config {
            default_locale: raw_config.default_locale,
            translations: raw_config.translations,
            defaults,
            limits,
            custom_css: raw_config.custom_css,
            site_url: raw_config.site_url,
        })
    }
}

impl Config {
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn get_language_translations(&self) -> &LanguageTranslations {
        &self.translations
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.custom_css.as_deref()
    }

    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }
}

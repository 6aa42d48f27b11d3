use rocket::http::Status;
use rocket::request::{self, FromRequest, Request};
use rocket::serde::Serialize;
use std::collections::HashMap;
use unic_langid::{parser::parse_language_identifier, LanguageIdentifier};

use crate::config::Config;
use crate::error::Error;

#[derive(Serialize, Clone, Debug)]
pub struct Translations {
    pub language: String,
    pub translations: HashMap<String, String>,
}

impl Translations {
    pub fn get(&self, key: &str, fallback: &str) -> String {
        self.translations
            .get(key)
            .map(String::as_str)
            .unwrap_or(fallback)
            .to_owned()
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.translations
    }

    /// Select the translations matching an `Accept-Language` header value
    pub fn negotiate(raw_accept_language: Option<&str>, config: &Config) -> Translations {
        // parse into normalized language identifiers
        let accept_languages: Vec<LanguageIdentifier> = raw_accept_language
            .map(|raw_accept_language| {
                accept_language::parse(raw_accept_language)
                    .iter()
                    .filter_map(|al| parse_language_identifier(al.as_bytes()).ok())
                    .collect()
            })
            .unwrap_or_default();

        // configured locales as normalized language identifiers, next to the key they came from
        let keys: Vec<(&String, LanguageIdentifier)> = config
            .get_language_translations()
            .keys()
            .filter_map(|key| {
                parse_language_identifier(key.as_bytes())
                    .ok()
                    .map(|li| (key, li))
            })
            .collect();

        let first_key = accept_languages.iter().find_map(|l| {
            keys.iter()
                .find(|(_, li)| li == l)
                .map(|(key, _)| key.as_str())
        });

        // fallback to the configured default language
        let lang = first_key.unwrap_or_else(|| config.default_locale());

        // the default locale is checked to be present when loading the config
        let translations = config
            .get_language_translations()
            .get(lang)
            .cloned()
            .unwrap_or_default();

        Translations {
            language: lang.to_owned(),
            translations,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Translations {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let config = match req.rocket().state::<Config>() {
            Some(config) => config,
            None => {
                return request::Outcome::Error((
                    Status::InternalServerError,
                    Error::InternalServer("No configuration found".to_owned()),
                ))
            }
        };

        let raw_accept_language = req.headers().get_one("accept-language");
        request::Outcome::Success(Self::negotiate(raw_accept_language, config))
    }
}

use serde::Serialize;
use tera::Context;

use crate::{
    batch::{GeneratedValues, GenerationRequest},
    config::Config,
    copy::{copy_text, Quoting},
    error::Error,
    templates::{RenderType, RenderedContent, TEMPLATES},
    translations::Translations,
};

/// Current state of the generator form
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormState {
    pub length: usize,
    pub prefix: String,
    pub count: usize,
    pub quotes: bool,
    /// Submitted values were above the limits and got capped
    pub capped: bool,
}

impl FormState {
    pub fn from_defaults(config: &Config) -> Self {
        let defaults = config.defaults();
        FormState {
            length: defaults.length,
            prefix: defaults.prefix.clone(),
            count: defaults.count,
            quotes: defaults.quotes,
            capped: false,
        }
    }

    pub fn from_request(request: &GenerationRequest, quotes: bool) -> Self {
        FormState {
            length: request.length(),
            prefix: request.prefix().to_owned(),
            count: request.count(),
            quotes,
            capped: false,
        }
    }

    pub fn with_capped(self, capped: bool) -> Self {
        FormState { capped, ..self }
    }
}

/// A generated value together with both variants of its clipboard text
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    value: &'a str,
    plain: String,
    quoted: String,
}

/// Messages shown by the browser script after a clipboard write
#[derive(Debug, Serialize)]
struct ToastMessages {
    copy_success: String,
    copy_all_success: String,
    copy_failure: String,
}

impl ToastMessages {
    fn new(translations: &Translations) -> Self {
        ToastMessages {
            copy_success: translations.get("copy_success", "Value copied to clipboard"),
            copy_all_success: translations
                .get("copy_all_success", "All values copied to clipboard"),
            copy_failure: translations.get("copy_failure", "Could not copy to clipboard"),
        }
    }
}

/// render the generator page, with the values of the last request if there are any
pub fn render_generator(
    config: &Config,
    form: &FormState,
    values: Option<&GeneratedValues>,
    translations: &Translations,
) -> Result<RenderedContent, Error> {
    let mut context = base_context(config, translations);

    context.insert("form", form);
    context.insert("limits", config.limits());

    if form.capped {
        let notice = translations
            .get(
                "limits_applied",
                "Values were capped at a length of {max_length} and a count of {max_count}",
            )
            .replace("{max_length}", &config.limits().max_length().to_string())
            .replace("{max_count}", &config.limits().max_count().to_string());
        context.insert("notice", &notice);
    }

    if let Some(values) = values {
        let rows: Vec<ResultRow> = values
            .iter()
            .map(|value| ResultRow {
                value,
                plain: copy_text(value, Quoting::Plain),
                quoted: copy_text(value, Quoting::Quoted),
            })
            .collect();

        let (summary_key, fallback) = if rows.len() == 1 {
            ("values_generated_one", "{count} value generated")
        } else {
            ("values_generated_other", "{count} values generated")
        };
        let summary = translations
            .get(summary_key, fallback)
            .replace("{count}", &rows.len().to_string());

        context.insert("results", &rows);
        context.insert("summary", &summary);
        context.insert("copy_all_plain", &values.copy_all_text(Quoting::Plain));
        context.insert("copy_all_quoted", &values.copy_all_text(Quoting::Quoted));
    }

    let content = TEMPLATES.render("generator.html", &context)?;

    Ok(RenderedContent {
        content,
        render_type: RenderType::Html,
    })
}

/// render the page shown for unknown routes
pub fn render_not_found(
    config: &Config,
    translations: &Translations,
) -> Result<RenderedContent, Error> {
    let context = base_context(config, translations);
    let content = TEMPLATES.render("not_found.html", &context)?;

    Ok(RenderedContent {
        content,
        render_type: RenderType::Html,
    })
}

fn base_context(config: &Config, translations: &Translations) -> Context {
    let mut context = Context::new();

    context.insert("language", &translations.language);
    context.insert("translations", translations.all());
    context.insert("toasts", &ToastMessages::new(translations));

    if let Some(custom_css) = config.custom_css() {
        context.insert("custom_css", custom_css);
    }
    if let Some(site_url) = config.site_url() {
        context.insert("site_url", site_url);
    }

    context
}

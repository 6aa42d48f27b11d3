use rocket::{
    response::{self, content, Responder},
    Request,
};
use std::path::Path;
use tera::Tera;

#[derive(Debug, PartialEq, Eq)]
pub struct RenderedContent {
    pub content: String,
    pub render_type: RenderType,
}

impl RenderedContent {
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<'r> Responder<'r, 'static> for RenderedContent {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let RenderedContent {
            content,
            render_type,
        } = self;
        match render_type {
            RenderType::Json => content::RawJson(content).respond_to(req),
            RenderType::Text => content::RawText(content).respond_to(req),
            RenderType::Html => content::RawHtml(content).respond_to(req),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RenderType {
    Json,
    Text,
    Html,
}

// Includes template at runtime, if available, otherwise uses compile-time template. This enables the option to override
// the templates per deployment, but also to simply use the default template.
macro_rules! include_template {
    ($tera:ident, $template_name:literal) => {
        if Path::new(concat!("templates/", $template_name)).exists() {
            if let Err(e) = $tera
                .add_template_file(concat!("templates/", $template_name), Some($template_name))
            {
                log::error!("Error loading custom {} template: {}", $template_name, e);
            }
        } else if let Err(e) = $tera.add_raw_template(
            $template_name,
            include_str!(concat!("templates/", $template_name)),
        ) {
            log::error!("Error loading included {} template: {}", $template_name, e);
        }
    };
}

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();

        include_template!(tera, "base.html");
        include_template!(tera, "generator.html");
        include_template!(tera, "not_found.html");

        tera
    };
}

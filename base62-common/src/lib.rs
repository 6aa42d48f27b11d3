/// Batch generation of prefixed values
pub mod batch;
/// Configuration mechanisms
pub mod config;
/// Clipboard text formatting
pub mod copy;
/// Error type with responder implementation
pub mod error;
/// Base62 random string generation
pub mod generator;
/// Page rendering
pub mod page;
/// Tera templates
pub mod templates;
/// Translation messages and request guard
pub mod translations;
#[macro_use]
extern crate lazy_static;

pub mod prelude {
    pub use crate::batch::{generate_batch, GeneratedValues, GenerationRequest};
    pub use crate::config::{Config, Limits};
    pub use crate::copy::{copy_all_text, copy_text, Quoting};
    pub use crate::error::Error;
    pub use crate::generator::{generate, ALPHABET};
    pub use crate::page::{render_generator, render_not_found, FormState};
    pub use crate::templates::{RenderType, RenderedContent};
    pub use crate::translations::Translations;
}

use base62_common::prelude::GeneratedValues;
use rocket::FromForm;
use serde::{Deserialize, Serialize};

/// Fields submitted by the generator form.
///
/// Numbers are kept as text, the form accepts anything and clamps it.
#[derive(Debug, FromForm)]
pub struct GenerateForm {
    pub length: Option<String>,
    pub prefix: Option<String>,
    pub count: Option<String>,
    pub quotes: bool,
}

/// Body of an API generation request
#[derive(Debug, Deserialize)]
pub struct ApiRequest {
    pub length: usize,
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub quotes: bool,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub count: usize,
    pub values: GeneratedValues,
    /// Clipboard text of the whole batch
    pub copy_all: String,
}

use rocket::{
    http::{ContentType, Status},
    response::Responder,
    Response,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
/// General Error type, used to capture all kinds of common errors. Can be used to respond to requests
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(&'static str),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server: {0}")]
    InternalServer(String),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parse Error: {0}")]
    Parse(#[from] strum::ParseError),
    #[error("Template Error: {0}")]
    Template(#[from] tera::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        use Error::*;
        let status = match &self {
            BadRequest(_) | InvalidArgument(_) | Json(_) | Parse(_) => Status::BadRequest,
            Config(_) | InternalServer(_) | Template(_) => Status::InternalServerError,
        };

        if status.class().is_server_error() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }

        if request.headers().get_one("Accept") == Some("application/json") {
            let body = json!({ "error": status.to_string() });

            return Response::build_from(body.to_string().respond_to(request)?)
                .status(status)
                .header(ContentType::JSON)
                .ok();
        }

        Response::build_from(status.to_string().respond_to(request)?)
            .status(status)
            .header(ContentType::Text)
            .ok()
    }
}

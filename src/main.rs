use std::str::FromStr;

use base62_common::prelude::*;
use rocket::{
    catch, catchers,
    fairing::AdHoc,
    figment::Figment,
    form::Form,
    get, post,
    response::content::{RawCss, RawJavaScript},
    routes,
    serde::json::Json,
    Build, Request, Rocket, State,
};
use types::{ApiRequest, ApiResponse, GenerateForm};

mod types;

#[get("/")]
async fn index(
    config: &State<Config>,
    translations: Translations,
) -> Result<RenderedContent, Error> {
    render_generator(config, &FormState::from_defaults(config), None, &translations)
}

#[post("/", data = "<form>")]
async fn generate_form(
    form: Form<GenerateForm>,
    config: &State<Config>,
    translations: Translations,
) -> Result<RenderedContent, Error> {
    let GenerateForm {
        length,
        prefix,
        count,
        quotes,
    } = form.into_inner();

    let (request, capped) = GenerationRequest::clamped(
        length.as_deref(),
        prefix.unwrap_or_default(),
        count.as_deref(),
        config.limits(),
    );
    let values = generate_batch(&request);
    log::info!(
        "Generated {} values of length {}",
        values.len(),
        request.length()
    );

    render_generator(
        config,
        &FormState::from_request(&request, quotes).with_capped(capped),
        Some(&values),
        &translations,
    )
}

#[post("/generate?<format>", data = "<request>")]
async fn api_generate(
    request: Json<ApiRequest>,
    format: Option<&str>,
    config: &State<Config>,
) -> Result<RenderedContent, Error> {
    let render_type = match format {
        Some(format) => RenderType::from_str(format)?,
        None => RenderType::Json,
    };
    if render_type == RenderType::Html {
        return Err(Error::BadRequest("the api renders json or text"));
    }

    let ApiRequest {
        length,
        prefix,
        count,
        quotes,
    } = request.into_inner();
    let request = GenerationRequest::new(length, prefix, count)?;
    request.check_limits(config.limits())?;
    let values = generate_batch(&request);
    log::info!(
        "Generated {} values of length {} for api",
        values.len(),
        request.length()
    );

    let copy_all = values.copy_all_text(Quoting::from(quotes));
    let content = match render_type {
        RenderType::Text => copy_all,
        _ => serde_json::to_string(&ApiResponse {
            count: values.len(),
            values,
            copy_all,
        })?,
    };

    Ok(RenderedContent {
        content,
        render_type,
    })
}

#[get("/generator.css")]
async fn generator_css() -> RawCss<&'static str> {
    RawCss(include_str!("templates/generator.css"))
}

#[get("/generator.js")]
async fn generator_js() -> RawJavaScript<&'static str> {
    RawJavaScript(include_str!("templates/generator.js"))
}

#[catch(404)]
fn not_found(request: &Request) -> Result<RenderedContent, Error> {
    let config = request
        .rocket()
        .state::<Config>()
        .ok_or_else(|| Error::InternalServer("No configuration found".to_owned()))?;
    let translations =
        Translations::negotiate(request.headers().get_one("accept-language"), config);

    render_not_found(config, &translations)
}

fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount(
            "/",
            routes![index, generate_form, generator_css, generator_js],
        )
        .mount("/api", routes![api_generate])
        .register("/", catchers![not_found])
        .attach(AdHoc::config::<Config>())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    build(rocket::Config::figment()).launch().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use figment::providers::{Format, Toml};
    use rocket::{
        figment::Figment,
        http::{Accept, ContentType, Header, Status},
        local::blocking::Client,
    };
    use serde_json::Value;

    use super::build;

    const TEST_CONFIG: &str = r#"
[global]
default_locale = "en"
log_level = "off"

[global.translations.en]
title = "Base62 Generator"
not_found = "Page not found"

[global.translations.nl]
title = "Base62-generator"
not_found = "Pagina niet gevonden"
"#;

    fn client() -> Client {
        let figment = Figment::from(rocket::Config::default())
            .select(rocket::Config::DEFAULT_PROFILE)
            .merge(Toml::string(TEST_CONFIG).nested());

        Client::tracked(build(figment)).expect("valid rocket instance")
    }

    fn result_values(body: &str) -> Vec<String> {
        body.split(r#"<span class="value">"#)
            .skip(1)
            .filter_map(|rest| rest.split("</span>").next())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_index() {
        let client = client();
        let response = client.get("/").dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));

        let body = response.into_string().unwrap();
        assert!(body.contains(r#"value="8""#));
        assert!(result_values(&body).is_empty());
    }

    #[test]
    fn test_translated_index() {
        let client = client();
        let response = client
            .get("/")
            .header(Header::new("Accept-Language", "nl"))
            .dispatch();

        let body = response.into_string().unwrap();
        assert!(body.contains("<title>Base62-generator</title>"));
        assert!(body.contains(r#"<html lang="nl">"#));
    }

    #[test]
    fn test_generate_form() {
        let client = client();
        let response = client
            .post("/")
            .header(ContentType::Form)
            .body("length=5&prefix=user_&count=3&quotes=on")
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let values = result_values(&response.into_string().unwrap());

        assert_eq!(values.len(), 3);
        for value in values {
            assert!(value.starts_with("user_"));
            assert_eq!(value.len(), 10);
            assert!(value[5..].chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_form_clamps_input() {
        let client = client();
        let response = client
            .post("/")
            .header(ContentType::Form)
            .body("length=0&count=abc")
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap();
        assert!(!body.contains(r#"class="notice""#));
        let values = result_values(&body);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].len(), 1);

        let response = client
            .post("/")
            .header(ContentType::Form)
            .body("length=500&count=2")
            .dispatch();
        let body = response.into_string().unwrap();
        assert!(body.contains(r#"class="notice""#));
        assert!(body.contains(r#"value="100""#));
        let values = result_values(&body);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|value| value.len() == 100));
    }

    #[test]
    fn test_second_generation_replaces_first() {
        let client = client();
        let response = client
            .post("/")
            .header(ContentType::Form)
            .body("length=12&prefix=old-&count=5")
            .dispatch();
        let first = result_values(&response.into_string().unwrap());
        assert_eq!(first.len(), 5);

        let response = client
            .post("/")
            .header(ContentType::Form)
            .body("length=4&prefix=new-&count=2")
            .dispatch();
        let body = response.into_string().unwrap();
        let second = result_values(&body);

        assert_eq!(second.len(), 2);
        assert!(second
            .iter()
            .all(|value| value.starts_with("new-") && value.len() == 8));
        assert!(first.iter().all(|value| !body.contains(value.as_str())));
        assert!(body.contains("2 values generated"));
    }

    #[test]
    fn test_api_json() {
        let client = client();
        let response = client
            .post("/api/generate")
            .header(ContentType::JSON)
            .body(r#"{"length": 8, "count": 1000}"#)
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["count"], 1000);

        let values = body["values"].as_array().unwrap();
        assert_eq!(values.len(), 1000);
        for value in values {
            let value = value.as_str().unwrap();
            assert_eq!(value.len(), 8);
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_api_text() {
        let client = client();
        let response = client
            .post("/api/generate?format=text")
            .header(ContentType::JSON)
            .body(r#"{"length": 4, "prefix": "a_", "count": 2, "quotes": true}"#)
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::Plain));

        let body = response.into_string().unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with("\"a_") && line.ends_with('"'));
            assert_eq!(line.len(), 8);
        }
    }

    #[test]
    fn test_api_rejects_invalid_input() {
        let client = client();
        let response = client
            .post("/api/generate")
            .header(ContentType::JSON)
            .header(Accept::JSON)
            .body(r#"{"length": 0}"#)
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["error"], "400 Bad Request");

        let response = client
            .post("/api/generate?format=yaml")
            .header(ContentType::JSON)
            .body(r#"{"length": 4}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let response = client
            .post("/api/generate?format=html")
            .header(ContentType::JSON)
            .body(r#"{"length": 4}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[test]
    fn test_api_rejects_values_over_limits() {
        let client = client();
        for body in [
            r#"{"length": 1000000000000000, "prefix": "a"}"#,
            r#"{"length": 8, "count": 18446744073709551615}"#,
            r#"{"length": 101}"#,
            r#"{"length": 8, "count": 1001}"#,
        ] {
            let response = client
                .post("/api/generate")
                .header(ContentType::JSON)
                .header(Accept::JSON)
                .body(body)
                .dispatch();
            assert_eq!(response.status(), Status::BadRequest, "{body}");
        }

        let prefix = "p".repeat(257);
        let response = client
            .post("/api/generate")
            .header(ContentType::JSON)
            .body(format!(r#"{{"length": 4, "prefix": "{prefix}"}}"#))
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let response = client
            .post("/api/generate")
            .header(ContentType::JSON)
            .body(r#"{"length": 100, "count": 1000}"#)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
    }

    #[test]
    fn test_assets() {
        let client = client();

        let response = client.get("/generator.css").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::CSS));

        let response = client.get("/generator.js").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JavaScript));
    }

    #[test]
    fn test_not_found() {
        let client = client();
        let response = client.get("/missing").dispatch();

        assert_eq!(response.status(), Status::NotFound);
        assert!(response.into_string().unwrap().contains("Page not found"));
    }
}

//! HTML pages, rendered with Tera. Templates are compiled into the binary so
//! the server does not depend on its working directory.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use actix_web_flash_messages::Level;
use serde::Serialize;
use tera::Context;
use tera::Tera;

use crate::content::NAV_LINKS;
use crate::content::STUDIO_NAME;
use crate::utils::error_500;

/// Build the template set once, at startup. Inheritance (`extends`) and
/// `include` are resolved here, so a broken template stops the server from
/// starting rather than failing a request.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    // `.html` names switch on autoescaping
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("contact_form.html", include_str!("../templates/contact_form.html")),
        ("landing.html", include_str!("../templates/landing.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("admin_leads.html", include_str!("../templates/admin_leads.html")),
    ])?;
    Ok(tera)
}

/// A banner at the top of a page: flash messages, or an error raised by the
/// current request
#[derive(Debug, Serialize)]
pub struct Notice {
    pub level: &'static str,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: "error",
            text: text.into(),
        }
    }
}

pub fn flash_notices(flash_messages: &IncomingFlashMessages) -> Vec<Notice> {
    flash_messages
        .iter()
        .map(|m| Notice {
            level: match m.level() {
                Level::Error | Level::Warning => "error",
                Level::Success => "success",
                _ => "info",
            },
            text: m.content().to_string(),
        })
        .collect()
}

/// Context shared by every page (header, footer, notices)
pub fn page_context(notices: &[Notice]) -> Context {
    let mut ctx = Context::new();
    ctx.insert("studio_name", STUDIO_NAME);
    ctx.insert("nav_links", &NAV_LINKS);
    ctx.insert("notices", notices);
    ctx
}

pub fn render(
    tera: &Tera,
    template: &str,
    ctx: &Context,
    status: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let body = tera.render(template, ctx).map_err(error_500)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

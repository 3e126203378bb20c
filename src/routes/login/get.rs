use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::templates::flash_notices;
use crate::templates::page_context;
use crate::templates::render;

/// `GET /login`
///
/// The outcome of a failed `POST /login` arrives as a flash message (signed
/// cookie), never in the query string; tera escapes it either way.
pub async fn login_form(
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let ctx = page_context(&flash_notices(&flash_messages));
    render(&tera, "login.html", &ctx, StatusCode::OK)
}

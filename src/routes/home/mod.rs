use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Context;
use tera::Tera;

use crate::content::clients_in;
use crate::content::project_categories;
use crate::content::projects_in;
use crate::content::CLIENT_CATEGORIES;
use crate::content::FEATURES;
use crate::content::MARQUEE;
use crate::content::SERVICES;
use crate::content::STATS;
use crate::content::TAGLINE;
use crate::content::TEAM;
use crate::content::TIMELINE;
use crate::routes::contact::insert_contact_form;
use crate::routes::contact::ContactFormData;
use crate::routes::contact::FieldErrors;
use crate::templates::flash_notices;
use crate::templates::page_context;
use crate::templates::render;
use crate::templates::Notice;

/// Section state of the landing page. Each grid filters itself; unknown
/// categories show everything.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    clientes: Option<String>,
    portfolio: Option<String>,
}

/// What the newsletter form shows after a failed submission
#[derive(Default)]
pub struct NewsletterState<'a> {
    pub email: &'a str,
    pub error: Option<String>,
}

/// Assemble and render the landing page. Also used by `POST /newsletter` to
/// re-render the page with the submitted address.
pub fn render_landing(
    tera: &Tera,
    query: &HomeQuery,
    notices: &[Notice],
    newsletter: NewsletterState<'_>,
    status: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx: Context = page_context(notices);
    ctx.insert("tagline", TAGLINE);
    ctx.insert("stats", &STATS);
    ctx.insert("services", &SERVICES);
    ctx.insert("marquee", &MARQUEE);
    ctx.insert("features", &FEATURES);

    let (active_client_category, clients) = clients_in(query.clientes.as_deref());
    ctx.insert("client_categories", &CLIENT_CATEGORIES);
    ctx.insert("active_client_category", active_client_category);
    ctx.insert("clients", &clients);

    let (active_project_category, projects) = projects_in(query.portfolio.as_deref());
    ctx.insert("project_categories", &project_categories());
    ctx.insert("active_project_category", active_project_category);
    ctx.insert("projects", &projects);

    ctx.insert("timeline", &TIMELINE);
    ctx.insert("team", &TEAM);

    ctx.insert("newsletter_email", newsletter.email);
    if let Some(error) = newsletter.error {
        ctx.insert("newsletter_error", &error);
    }

    // the landing page embeds an empty contact form
    insert_contact_form(&mut ctx, &ContactFormData::default(), &FieldErrors::new());

    render(tera, "landing.html", &ctx, status)
}

/// `GET /`
#[tracing::instrument(name = "Rendering landing page", skip(tera, flash_messages))]
pub async fn home(
    query: web::Query<HomeQuery>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    render_landing(
        &tera,
        &query,
        &flash_notices(&flash_messages),
        NewsletterState::default(),
        StatusCode::OK,
    )
}

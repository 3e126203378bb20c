use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tera::Context;
use tera::Tera;

use crate::domain::parse_social_handle;
use crate::domain::CompanyName;
use crate::domain::ContactName;
use crate::domain::EmailAddress;
use crate::domain::FollowerCount;
use crate::domain::LeadMessage;
use crate::domain::NewLead;
use crate::domain::PhoneNumber;
use crate::domain::ProjectType;
use crate::store_client::StoreClient;
use crate::store_client::LEADS_TABLE;
use crate::templates::flash_notices;
use crate::templates::page_context;
use crate::templates::render;
use crate::templates::Notice;
use crate::utils::redirect;

const THANKS: &str = "¡Gracias por tu mensaje! Nos pondremos en contacto pronto.";
const RETRY: &str = "Hubo un error al enviar el mensaje. Por favor, intentá nuevamente.";

/// Contact form as submitted. Everything is text, and missing fields are
/// blank, so that a rejected form can be shown again exactly as typed.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub message: String,
    pub instagram: String,
    pub tiktok: String,
    pub youtube: String,
    pub instagram_followers: String,
    pub tiktok_followers: String,
    pub youtube_subscribers: String,
}

/// Message per rejected field, keyed by the form field's name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Keep the parsed value, or record why the field was rejected
fn check<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    parsed: Result<T, String>,
) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            errors.insert(field, e);
            None
        }
    }
}

/// Unlike the other domain parsers, this reports every invalid field at once
impl TryFrom<&ContactFormData> for NewLead {
    type Error = FieldErrors;
    fn try_from(form: &ContactFormData) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        let e = &mut errors;

        let name = check(e, "name", ContactName::parse(form.name.clone()));
        let email = check(e, "email", EmailAddress::parse(form.email.clone()));
        let phone = check(e, "phone", PhoneNumber::parse(form.phone.clone()));
        let company = check(e, "company", CompanyName::parse(form.company.clone()));
        let project_type = check(e, "project_type", ProjectType::parse(form.project_type.clone()));
        let message = check(e, "message", LeadMessage::parse(form.message.clone()));
        let instagram = check(e, "instagram", parse_social_handle(&form.instagram));
        let tiktok = check(e, "tiktok", parse_social_handle(&form.tiktok));
        let youtube = check(e, "youtube", parse_social_handle(&form.youtube));
        let instagram_followers = check(
            e,
            "instagram_followers",
            FollowerCount::parse(&form.instagram_followers),
        );
        let tiktok_followers = check(e, "tiktok_followers", FollowerCount::parse(&form.tiktok_followers));
        let youtube_subscribers = check(
            e,
            "youtube_subscribers",
            FollowerCount::parse(&form.youtube_subscribers),
        );

        match (
            name,
            email,
            phone,
            company,
            project_type,
            message,
            instagram,
            tiktok,
            youtube,
            instagram_followers,
            tiktok_followers,
            youtube_subscribers,
        ) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(company),
                Some(project_type),
                Some(message),
                Some(instagram),
                Some(tiktok),
                Some(youtube),
                Some(instagram_followers),
                Some(tiktok_followers),
                Some(youtube_subscribers),
            ) => Ok(NewLead {
                name,
                email,
                phone,
                company,
                project_type,
                message,
                instagram,
                instagram_followers,
                tiktok,
                tiktok_followers,
                youtube,
                youtube_subscribers,
            }),
            _ => Err(errors),
        }
    }
}

/// Fill the context used by `contact_form.html`
pub fn insert_contact_form(
    ctx: &mut Context,
    form: &ContactFormData,
    errors: &FieldErrors,
) {
    let project_types: Vec<&str> = ProjectType::ALL.iter().map(ProjectType::label).collect();
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("project_types", &project_types);
}

fn contact_page(
    tera: &Tera,
    notices: &[Notice],
    form: &ContactFormData,
    errors: &FieldErrors,
    status: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx = page_context(notices);
    insert_contact_form(&mut ctx, form, errors);
    render(tera, "contact.html", &ctx, status)
}

/// `GET /contacto`
pub async fn contact_form(
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    contact_page(
        &tera,
        &flash_notices(&flash_messages),
        &ContactFormData::default(),
        &FieldErrors::new(),
        StatusCode::OK,
    )
}

/// `POST /contacto`
///
/// Invalid input is answered with the form itself (400), values kept and
/// errors next to their fields. Nothing reaches the store in that case.
#[tracing::instrument(
    name = "Submitting contact form",
    skip(form, store, tera),
    fields(
        lead_email = %form.email,
        lead_company = %form.company,
    )
)]
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    store: web::Data<StoreClient>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();

    let new_lead = match NewLead::try_from(&form) {
        Ok(new_lead) => new_lead,
        Err(errors) => {
            tracing::info!(rejected = ?errors.keys().collect::<Vec<_>>(), "Contact form rejected");
            return contact_page(&tera, &[], &form, &errors, StatusCode::BAD_REQUEST);
        }
    };

    if let Err(e) = store
        .insert(LEADS_TABLE, &[new_lead.to_record(Utc::now())])
        .await
    {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to store lead"
        );
        return contact_page(
            &tera,
            &[Notice::error(RETRY)],
            &form,
            &FieldErrors::new(),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
    }

    FlashMessage::success(THANKS).send();
    Ok(redirect("/contacto"))
}

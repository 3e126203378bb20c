use std::fmt::Debug;

use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use chrono_tz::Tz;
use serde::Serialize;
use tera::Tera;

use crate::authentication::AdminUser;
use crate::domain::Lead;
use crate::domain::LEAD_STATUSES;
use crate::leads::DateFilter;
use crate::leads::LeadFilter;
use crate::leads::LeadFilterParams;
use crate::routes::error_chain_fmt;
use crate::startup::StudioTimeZone;
use crate::store_client::StoreClient;
use crate::store_client::StoreError;
use crate::templates::flash_notices;
use crate::templates::page_context;
use crate::templates::render;
use crate::utils::error_500;

#[derive(thiserror::Error)]
pub enum LeadsPanelError {
    #[error("Filtro inválido. {0}")]
    InvalidFilter(String),
    // shown in the panel, in place of the table
    #[error("No se pudieron cargar los leads. Intentá nuevamente más tarde.")]
    FetchFailed(#[source] StoreError),
}

impl Debug for LeadsPanelError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LeadsPanelError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            Self::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// The instant a panel (or an export without one) is computed at, to the
/// store's precision
pub(super) fn pinned_now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

/// Query the store for the leads matching the panel's query string. The
/// store narrows the rows down; the filter is then applied again locally,
/// which adds the search term and can only ever remove rows.
///
/// Shared by the panel and the export, so both see the same rows.
#[tracing::instrument(name = "Fetching leads", skip(store))]
pub(super) async fn fetch_leads(
    store: &StoreClient,
    params: LeadFilterParams,
    now: DateTime<Tz>,
) -> Result<Vec<Lead>, LeadsPanelError> {
    let filter = LeadFilter::try_from(params).map_err(LeadsPanelError::InvalidFilter)?;
    let leads = store
        .select::<Lead>(&filter.to_select(now))
        .await
        .map_err(LeadsPanelError::FetchFailed)?;
    let fetched = leads.len();
    let leads = filter.apply(leads, now);
    tracing::info!(fetched, shown = leads.len(), "Leads filtered");
    Ok(leads)
}

/// A table row; absent handles are shown as blanks
#[derive(Serialize)]
struct LeadRow {
    company: String,
    name: String,
    email: String,
    phone: String,
    instagram: String,
    instagram_followers: String,
    tiktok: String,
    tiktok_followers: String,
    youtube: String,
    youtube_subscribers: String,
    project_type: String,
    status: String,
    created_on: String,
}

impl LeadRow {
    fn new(
        lead: Lead,
        tz: &Tz,
    ) -> Self {
        Self {
            created_on: lead.created_on(tz),
            instagram_followers: lead.instagram_followers.to_string(),
            tiktok_followers: lead.tiktok_followers.to_string(),
            youtube_subscribers: lead.youtube_subscribers.to_string(),
            company: lead.company,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            instagram: lead.instagram.unwrap_or_default(),
            tiktok: lead.tiktok.unwrap_or_default(),
            youtube: lead.youtube.unwrap_or_default(),
            project_type: lead.project_type,
            status: lead.status,
        }
    }
}

/// An `<option>` of the filter form
#[derive(Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
}

/// "todos" first, then every known status
fn status_options() -> Vec<SelectOption> {
    let all = SelectOption {
        value: "todos",
        label: "Todos los estados",
    };
    std::iter::once(all)
        .chain(LEAD_STATUSES.into_iter().map(|s| SelectOption { value: s, label: s }))
        .collect()
}

/// `GET /admin`
///
/// Every response is computed from its own query string, so what is shown
/// always belongs to the filters in the form. When the store cannot be
/// reached, the table is replaced by an error (502); stale rows are never
/// shown.
///
/// The rows are pinned to the instant the panel is rendered at (`as_of`),
/// which the export link carries along with the filters.
#[tracing::instrument(
    name = "Rendering leads panel",
    skip(store, tera, tz, admin, flash_messages)
)]
pub async fn leads_panel(
    params: web::Query<LeadFilterParams>,
    store: web::Data<StoreClient>,
    tera: web::Data<Tera>,
    tz: web::Data<StudioTimeZone>,
    admin: web::ReqData<AdminUser>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let mut params = params.into_inner();
    let as_of = *params.as_of.get_or_insert_with(pinned_now);
    let export_query = serde_urlencoded::to_string(&params).map_err(error_500)?;

    let mut ctx = page_context(&flash_notices(&flash_messages));
    ctx.insert("username", &**admin);
    ctx.insert("params", &params);
    ctx.insert("export_query", &export_query);
    let date_options: Vec<SelectOption> = DateFilter::ALL
        .into_iter()
        .map(|d| SelectOption {
            value: d.as_str(),
            label: d.label(),
        })
        .collect();
    ctx.insert("date_options", &date_options);
    ctx.insert("status_options", &status_options());

    let status = match fetch_leads(&store, params, as_of.with_timezone(&tz.0)).await {
        Ok(leads) => {
            let rows: Vec<LeadRow> = leads.into_iter().map(|l| LeadRow::new(l, &tz.0)).collect();
            ctx.insert("leads", &rows);
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Leads panel failed"
            );
            ctx.insert("fetch_error", &e.to_string());
            ctx.insert("leads", &Vec::<LeadRow>::new());
            e.status_code()
        }
    };

    render(&tera, "admin_leads.html", &ctx, status)
}

use std::fmt::Debug;

use actix_web::http::header::ContentDisposition;
use actix_web::http::header::DispositionParam;
use actix_web::http::header::DispositionType;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use chrono::Utc;
use rust_xlsxwriter::XlsxError;

use super::leads::fetch_leads;
use super::leads::pinned_now;
use super::leads::LeadsPanelError;
use crate::leads::export_filename;
use crate::leads::leads_to_xlsx;
use crate::leads::LeadFilterParams;
use crate::routes::error_chain_fmt;
use crate::startup::StudioTimeZone;
use crate::store_client::StoreClient;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    FetchFailed(#[from] LeadsPanelError),
    #[error("Failed to write the spreadsheet")]
    SerializationFailed(#[source] XlsxError),
}

impl Debug for ExportError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ExportError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::FetchFailed(e) => e.status_code(),
            Self::SerializationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `GET /admin/export`
///
/// Takes the query string of the panel's export link, `as_of` included, and
/// returns the same rows, in the same order, as a spreadsheet download.
/// Without `as_of` the rows are pinned to the time of the request.
#[tracing::instrument(name = "Exporting leads", skip(params, store, tz))]
pub async fn export_leads(
    params: web::Query<LeadFilterParams>,
    store: web::Data<StoreClient>,
    tz: web::Data<StudioTimeZone>,
) -> Result<HttpResponse, ExportError> {
    let mut params = params.into_inner();
    let as_of = *params.as_of.get_or_insert_with(pinned_now);
    let leads = fetch_leads(&store, params, as_of.with_timezone(&tz.0)).await?;
    let workbook = leads_to_xlsx(&leads, &tz.0).map_err(ExportError::SerializationFailed)?;
    tracing::info!(rows = leads.len(), bytes = workbook.len(), "Export ready");

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(export_filename(Utc::now().with_timezone(&tz.0).date_naive()))],
        })
        .body(workbook))
}

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::XlsxError;

use crate::domain::Lead;

/// Header row of the export, one column per exported field
pub const EXPORT_COLUMNS: [&str; 14] = [
    "Empresa",
    "Nombre",
    "Email",
    "Teléfono",
    "Instagram",
    "Seguidores IG",
    "TikTok",
    "Seguidores TT",
    "YouTube",
    "Suscriptores YT",
    "Tipo de Proyecto",
    "Mensaje",
    "Estado",
    "Fecha",
];

const SHEET_NAME: &str = "Leads";

/// `leads-2026-10-16.xlsx`
pub fn export_filename(today: NaiveDate) -> String { format!("leads-{}.xlsx", today.format("%Y-%m-%d")) }

/// Serialize the leads, in the given order, to an in-memory `.xlsx` workbook
/// with a single sheet. Text is written verbatim, counts as numbers, and the
/// creation date as `dd/mm/YYYY` in `tz`.
pub fn leads_to_xlsx(
    leads: &[Lead],
    tz: &Tz,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, title) in (0u16..).zip(EXPORT_COLUMNS) {
        sheet.write_string_with_format(0, col, title, &bold)?;
    }

    for (row, lead) in (1u32..).zip(leads) {
        sheet.write_string(row, 0, &lead.company)?;
        sheet.write_string(row, 1, &lead.name)?;
        sheet.write_string(row, 2, &lead.email)?;
        sheet.write_string(row, 3, &lead.phone)?;
        sheet.write_string(row, 4, lead.instagram.as_deref().unwrap_or_default())?;
        sheet.write_number(row, 5, lead.instagram_followers.get() as f64)?;
        sheet.write_string(row, 6, lead.tiktok.as_deref().unwrap_or_default())?;
        sheet.write_number(row, 7, lead.tiktok_followers.get() as f64)?;
        sheet.write_string(row, 8, lead.youtube.as_deref().unwrap_or_default())?;
        sheet.write_number(row, 9, lead.youtube_subscribers.get() as f64)?;
        sheet.write_string(row, 10, &lead.project_type)?;
        sheet.write_string(row, 11, &lead.message)?;
        sheet.write_string(row, 12, &lead.status)?;
        sheet.write_string(row, 13, lead.created_on(tz))?;
    }

    workbook.save_to_buffer()
}

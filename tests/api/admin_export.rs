use std::io::Cursor;

use calamine::open_workbook_from_rs;
use calamine::Data;
use calamine::Reader;
use calamine::Xlsx;
use chrono::Duration;
use chrono::SecondsFormat;
use chrono::Utc;
use chrono_tz::America::Argentina::Buenos_Aires;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::lead_row;
use crate::helpers::spawn_app;
use crate::helpers::LEADS_PATH;

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The `href` of the panel's export link, unescaped
fn export_link(html: &str) -> String {
    let marker = "id=\"export-link\" href=\"";
    let start = html.find(marker).expect("no export link") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].replace("&amp;", "&").replace("&#x2F;", "/")
}

fn read_sheet(bytes: Vec<u8>) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    workbook.worksheet_range("Leads").unwrap()
}

#[tokio::test]
async fn export_matches_the_panel() {
    let app = spawn_app().await;
    let mut by_tiktok = lead_row(1, "Ana", (20_000, 0, 0), &days_ago(3));
    by_tiktok["tiktok"] = json!("@ana_tiktok");
    app.mock_leads(json!([
        by_tiktok,
        lead_row(2, "Bruno", (0, 0, 0), &days_ago(3)),
        lead_row(3, "Anabel", (0, 0, 700), &days_ago(10)),
    ]))
    .await;
    app.login_as_admin().await;

    let html = app.get_html("/admin?q=ana&date=month").await;
    // the panel links to the export with its own filters, pinned to the
    // time it was rendered at
    let link = export_link(&html);
    assert!(link.starts_with("/admin/export?"));
    assert!(link.contains("date=month"));
    assert!(link.contains("q=ana"));
    assert!(link.contains("as_of="));

    let resp = app.get(&link).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment"));
    let local_today = Utc::now().with_timezone(&Buenos_Aires);
    assert!(disposition.contains(&format!("leads-{}.xlsx", local_today.format("%Y-%m-%d"))));

    let range = read_sheet(resp.bytes().await.unwrap().to_vec());

    // header + the two rows shown in the panel, in the same order
    assert_eq!(range.height(), 3);
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Empresa".to_string())));
    assert_eq!(range.get_value((0, 13)), Some(&Data::String("Fecha".to_string())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::String("Ana".to_string())));
    assert_eq!(range.get_value((1, 5)), Some(&Data::Float(20_000.0)));
    assert_eq!(range.get_value((1, 6)), Some(&Data::String("@ana_tiktok".to_string())));
    assert_eq!(range.get_value((2, 1)), Some(&Data::String("Anabel".to_string())));
    assert_eq!(
        range.get_value((2, 13)),
        Some(&Data::String(
            (Utc::now() - Duration::days(10))
                .with_timezone(&Buenos_Aires)
                .format("%d/%m/%Y")
                .to_string()
        ))
    );
}

#[tokio::test]
async fn export_keeps_the_rows_the_panel_showed() {
    let app = spawn_app().await;
    // first query (the panel) sees one lead
    Mock::given(method("GET"))
        .and(path(LEADS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([lead_row(1, "Ana", (0, 0, 0), &days_ago(2))])),
        )
        .up_to_n_times(1)
        .mount(&app.store_server)
        .await;
    app.login_as_admin().await;

    let html = app.get_html("/admin").await;
    assert_eq!(html.matches("<tr class=\"lead\">").count(), 1);

    // a lead arrives before the export is downloaded
    let arrived = (Utc::now() + Duration::seconds(1)).to_rfc3339_opts(SecondsFormat::Micros, true);
    app.mock_leads(json!([
        lead_row(1, "Ana", (0, 0, 0), &days_ago(2)),
        lead_row(2, "Bruno", (0, 0, 0), &arrived),
    ]))
    .await;

    let resp = app.get(&export_link(&html)).await;

    assert_eq!(resp.status().as_u16(), 200);
    let range = read_sheet(resp.bytes().await.unwrap().to_vec());
    assert_eq!(range.height(), 2);
    assert_eq!(range.get_value((1, 1)), Some(&Data::String("Ana".to_string())));

    // and the store is asked for the same snapshot
    let received = app.store_server.received_requests().await.unwrap();
    let export_query: Vec<(String, String)> = received
        .last()
        .unwrap()
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(export_query
        .iter()
        .any(|(k, v)| k == "created_at" && v.starts_with("lte.")));
}

#[tokio::test]
async fn empty_export_has_only_the_header() {
    let app = spawn_app().await;
    app.mock_leads(json!([])).await;
    app.login_as_admin().await;

    let resp = app.get("/admin/export").await;

    assert_eq!(resp.status().as_u16(), 200);
    let range = read_sheet(resp.bytes().await.unwrap().to_vec());
    assert_eq!(range.height(), 1);
    assert_eq!(range.width(), 14);
}

#[tokio::test]
async fn export_fails_when_the_store_does() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path(LEADS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.store_server)
        .await;
    app.login_as_admin().await;

    let resp = app.get("/admin/export").await;

    assert_eq!(resp.status().as_u16(), 502);
}

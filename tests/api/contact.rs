use serde_json::json;
use serde_json::Value;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::check_redirect;
use crate::helpers::spawn_app;
use crate::helpers::LEADS_PATH;

fn valid_form() -> Value {
    json!({
        "name": "Lucía Gómez",
        "email": "lucia@marca.com",
        "phone": "+54 9 11 1234-5678",
        "company": "Marca SA",
        "project_type": "Fotografía",
        "message": "Queremos una sesión de fotos para la colección de invierno.",
        "instagram": "@marca",
        "instagram_followers": "12.500",
        "tiktok": "",
        "tiktok_followers": "",
        "youtube": "",
        "youtube_subscribers": "",
    })
}

fn with(
    mut form: Value,
    field: &str,
    value: &str,
) -> Value {
    form[field] = json!(value);
    form
}

#[tokio::test]
async fn contact_page_shows_the_form() {
    let app = spawn_app().await;

    let resp = app.get("/contacto").await;

    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"contact-form\""));
    assert!(html.contains("Estrategia de Contenido"));
}

#[tokio::test]
async fn valid_submission_is_stored_once() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(LEADS_PATH))
        .and(header("Prefer", "return=minimal"))
        .and(body_partial_json(json!([{
            "name": "Lucía Gómez",
            "email": "lucia@marca.com",
            "company": "Marca SA",
            "project_type": "Fotografía",
            "instagram": "@marca",
            "instagram_followers": 12500,
            "tiktok": null,
            "tiktok_followers": 0,
            "status": "nuevo",
        }])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let resp = app.post_form("/contacto", &valid_form()).await;
    check_redirect(&resp, "/contacto");

    let html = app.get_html("/contacto").await;
    assert!(html.contains("¡Gracias por tu mensaje!"));

    // flash messages are shown once
    let html = app.get_html("/contacto").await;
    assert!(!html.contains("¡Gracias por tu mensaje!"));
}

#[tokio::test]
async fn invalid_phone_is_rejected_without_insert() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(LEADS_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.store_server)
        .await;

    let resp = app
        .post_form("/contacto", &with(valid_form(), "phone", "abc"))
        .await;

    assert_eq!(resp.status().as_u16(), 400);
    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"error-phone\""));
    assert!(html.contains("Por favor, ingresá un número de teléfono válido."));
    // the other fields keep what was typed, and are not flagged
    assert!(html.contains("value=\"abc\""));
    assert!(html.contains("value=\"Lucía Gómez\""));
    assert!(html.contains("value=\"lucia@marca.com\""));
    assert!(!html.contains("id=\"error-name\""));
    assert!(!html.contains("id=\"error-email\""));
}

#[tokio::test]
async fn every_invalid_field_is_reported() {
    let app = spawn_app().await;

    let test_cases = [
        ("name", "L", "error-name"),
        ("email", "lucia.marca.com", "error-email"),
        ("phone", "1234", "error-phone"),
        ("company", " ", "error-company"),
        ("project_type", "Catering", "error-project_type"),
        ("message", "Hola", "error-message"),
    ];

    for (field, value, error_id) in test_cases {
        let resp = app
            .post_form("/contacto", &with(valid_form(), field, value))
            .await;
        assert_eq!(resp.status().as_u16(), 400, "{field}={value:?} was accepted");
        let html = resp.text().await.unwrap();
        assert!(html.contains(error_id), "{field}={value:?} has no error");
    }

    let received = app.store_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn store_failure_keeps_the_form() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(LEADS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let resp = app.post_form("/contacto", &valid_form()).await;

    assert_eq!(resp.status().as_u16(), 500);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Hubo un error al enviar el mensaje"));
    assert!(html.contains("value=\"Lucía Gómez\""));
}

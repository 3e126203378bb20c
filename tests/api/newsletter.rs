use serde_json::json;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::check_redirect;
use crate::helpers::spawn_app;
use crate::helpers::NEWSLETTER_PATH;

#[tokio::test]
async fn subscription_is_stored_as_active() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(NEWSLETTER_PATH))
        .and(body_partial_json(json!([{
            "email": "fan@ejemplo.com",
            "status": "activo",
        }])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let resp = app
        .post_form("/newsletter", &json!({"email": " fan@ejemplo.com "}))
        .await;
    check_redirect(&resp, "/");

    let html = app.get_html("/").await;
    assert!(html.contains("¡Gracias por suscribirte!"));
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(NEWSLETTER_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.store_server)
        .await;

    for email in ["", "fan", "fan@"] {
        let resp = app.post_form("/newsletter", &json!({ "email": email })).await;
        assert_eq!(resp.status().as_u16(), 400, "{email:?} was accepted");
        let html = resp.text().await.unwrap();
        assert!(html.contains("id=\"error-newsletter\""));
        assert!(html.contains(&format!("value=\"{email}\"")));
    }
}

#[tokio::test]
async fn store_failure_is_reported() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(NEWSLETTER_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.store_server)
        .await;

    let resp = app
        .post_form("/newsletter", &json!({"email": "fan@ejemplo.com"}))
        .await;

    assert_eq!(resp.status().as_u16(), 500);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Error al suscribirse"));
    assert!(html.contains("value=\"fan@ejemplo.com\""));
}

use serde_json::json;

use crate::helpers::check_redirect;
use crate::helpers::spawn_app;

#[tokio::test]
async fn panel_requires_login() {
    let app = spawn_app().await;

    for route in ["/admin", "/admin/export"] {
        let resp = app.get(route).await;
        check_redirect(&resp, "/login");
    }

    // the store is never asked for leads on behalf of anonymous users
    let received = app.store_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn wrong_password_shows_error_once() {
    let app = spawn_app().await;

    let resp = app
        .post_login(&json!({
            "username": app.admin.username,
            "password": "otra-contraseña",
        }))
        .await;
    check_redirect(&resp, "/login");

    let html = app.get_html("/login").await;
    assert!(html.contains("Usuario o contraseña incorrectos."));

    let html = app.get_html("/login").await;
    assert!(!html.contains("Usuario o contraseña incorrectos."));

    // still anonymous
    check_redirect(&app.get("/admin").await, "/login");
}

#[tokio::test]
async fn unknown_user_is_rejected() {
    let app = spawn_app().await;

    let resp = app
        .post_login(&json!({
            "username": "intruso",
            "password": app.admin.password,
        }))
        .await;

    check_redirect(&resp, "/login");
    check_redirect(&app.get("/admin").await, "/login");
}

#[tokio::test]
async fn logout_clears_session() {
    let app = spawn_app().await;
    app.mock_leads(json!([])).await;

    app.login_as_admin().await;
    assert_eq!(app.get("/admin").await.status().as_u16(), 200);

    let resp = app.post_form("/admin/logout", &json!({})).await;
    check_redirect(&resp, "/login");

    let html = app.get_html("/login").await;
    assert!(html.contains("Cerraste sesión correctamente."));

    check_redirect(&app.get("/admin").await, "/login");
}

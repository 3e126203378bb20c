use crate::helpers::spawn_app;

#[tokio::test]
async fn landing_page_renders_every_section() {
    let app = spawn_app().await;

    let resp = app.get("/").await;
    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();

    for section in [
        "id=\"hero\"",
        "id=\"statistics\"",
        "id=\"services\"",
        "id=\"features\"",
        "id=\"clients\"",
        "id=\"portfolio\"",
        "id=\"timeline\"",
        "id=\"team\"",
        "id=\"newsletter\"",
        "id=\"contact-form\"",
    ] {
        assert!(html.contains(section), "missing {section}");
    }
}

#[tokio::test]
async fn clients_grid_filters_by_category() {
    let app = spawn_app().await;

    let html = app.get_html("/?clientes=Startups").await;
    assert!(html.contains("Startup Tech"));
    assert!(html.contains("App Fintech"));
    assert!(!html.contains("Marca Deportiva"));

    // unknown categories fall back to all clients
    let html = app.get_html("/?clientes=Restaurantes").await;
    assert!(html.contains("Startup Tech"));
    assert!(html.contains("Marca Deportiva"));
}

#[tokio::test]
async fn portfolio_grid_filters_by_category() {
    let app = spawn_app().await;

    let html = app.get_html("/?portfolio=Publicidad").await;
    assert!(html.contains("Publicidad para TV"));
    assert!(!html.contains("Cinematografía con Drones"));

    let html = app.get_html("/").await;
    assert!(html.contains("Publicidad para TV"));
    assert!(html.contains("Cinematografía con Drones"));
}

#[tokio::test]
async fn landing_page_does_not_touch_the_store() {
    let app = spawn_app().await;

    app.get("/").await;

    let received = app.store_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

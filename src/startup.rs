use std::net::TcpListener;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::web::Data;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_lab::middleware::from_fn;
use anyhow::Context;
use chrono_tz::Tz;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tera::Tera;
use tracing_actix_web::TracingLogger;

use crate::authentication::reject_anonymous_users;
use crate::configuration::AdminSettings;
use crate::configuration::Settings;
use crate::routes::contact_form;
use crate::routes::export_leads;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::leads_panel;
use crate::routes::login;
use crate::routes::login_form;
use crate::routes::logout;
use crate::routes::submit_contact;
use crate::routes::subscribe_newsletter;
use crate::store_client::StoreClient;
use crate::templates::build_templates;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener and build every shared component: the store client
    /// and the compiled templates
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(&addr).with_context(|| format!("Failed to bind {addr}"))?;
        // port 0 lets the OS pick; tests read the result back via `get_port`
        let port = listener.local_addr()?.port();

        let store = StoreClient::new(
            cfg.store.base_url.clone(),
            cfg.store.api_key.clone(),
            cfg.store.timeout(),
        )
        .context("Failed to build the store client")?;
        let templates = build_templates().context("Failed to compile templates")?;

        let server = run(
            listener,
            store,
            templates,
            cfg.admin,
            cfg.application.hmac_secret,
            cfg.application.timezone,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Wrapper for the configured time zone, so that handlers can ask for it by
/// type through `Data`
#[derive(Debug, Clone, Copy)]
pub struct StudioTimeZone(pub Tz);

/// The server does not bind, it only listens to an already bound address.
///
/// Declares all endpoints.
pub fn run(
    listener: TcpListener,
    store: StoreClient,
    templates: Tera,
    admin: AdminSettings,
    hmac_secret: Secret<String>,
    timezone: Tz,
) -> Result<Server, anyhow::Error> {
    // signs (and encrypts) both the session and the flash message cookies
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("hmac_secret must be at least 64 bytes long")?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    // `Data` is an `Arc`: one store client and one template set, shared by all
    // workers
    let store = Data::new(store);
    let templates = Data::new(templates);
    let admin = Data::new(admin);
    let timezone = Data::new(StudioTimeZone(timezone));

    // the closure is called once per worker, hence the clones
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            // the session lives entirely in the (private) cookie; there is a
            // single admin and nothing to revoke server-side
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/contacto", web::get().to(contact_form))
            .route("/contacto", web::post().to(submit_contact))
            .route("/newsletter", web::post().to(subscribe_newsletter))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            .service(
                web::scope("/admin")
                    .wrap(from_fn(reject_anonymous_users))
                    .route("", web::get().to(leads_panel))
                    .route("/export", web::get().to(export_leads))
                    .route("/logout", web::post().to(logout)),
            )
            .app_data(store.clone())
            .app_data(templates.clone())
            .app_data(admin.clone())
            .app_data(timezone.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::PasswordHasher;
use argon2::Version;
use heres_studio::configuration::get_configuration;
use heres_studio::startup::Application;
use heres_studio::telemetry::get_subscriber;
use heres_studio::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::redirect::Policy;
use secrecy::Secret;
use serde_json::json;
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Logs are discarded unless `TEST_LOG` is set:
///
/// `TEST_LOG=1 cargo test | bunyan`
static TRACING: Lazy<()> = Lazy::new(|| {
    let result = match std::env::var("TEST_LOG") {
        Ok(_) => init_subscriber(get_subscriber("test", "debug", std::io::stdout)),
        Err(_) => init_subscriber(get_subscriber("test", "debug", std::io::sink)),
    };
    result.expect("failed to init tracing");
});

pub const LEADS_PATH: &str = "/rest/v1/leads";
pub const NEWSLETTER_PATH: &str = "/rest/v1/newsletter_subscribers";

pub struct TestAdmin {
    pub username: String,
    pub password: String,
}

impl TestAdmin {
    fn generate() -> Self {
        Self {
            username: "lautaro".to_string(),
            password: "una-contraseña-larga".to_string(),
        }
    }

    /// Same algorithm as production, cheaper parameters
    fn password_hash(&self) -> String {
        let salt = SaltString::generate(&mut StdRng::from_entropy());
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).unwrap(),
        )
        .hash_password(self.password.as_bytes(), &salt)
        .unwrap()
        .to_string()
    }
}

pub struct TestApp {
    pub addr: String,
    /// Stands in for the hosted table store
    pub store_server: MockServer,
    pub admin: TestAdmin,
    /// Keeps cookies (session, flash messages), never follows redirects
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(
        &self,
        route: &str,
    ) -> reqwest::Response {
        self.client
            .get(format!("{}{route}", self.addr))
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_html(
        &self,
        route: &str,
    ) -> String {
        self.get(route).await.text().await.unwrap()
    }

    pub async fn post_form<Body: serde::Serialize>(
        &self,
        route: &str,
        body: &Body,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}{route}", self.addr))
            .form(body)
            .send()
            .await
            .expect("execute request")
    }

    pub async fn post_login<Body: serde::Serialize>(
        &self,
        body: &Body,
    ) -> reqwest::Response {
        self.post_form("/login", body).await
    }

    pub async fn login_as_admin(&self) {
        let resp = self
            .post_login(&json!({
                "username": self.admin.username,
                "password": self.admin.password,
            }))
            .await;
        check_redirect(&resp, "/admin");
    }

    /// Answer every leads query with `rows`
    pub async fn mock_leads(
        &self,
        rows: Value,
    ) {
        Mock::given(method("GET"))
            .and(path(LEADS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.store_server)
            .await;
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let store_server = MockServer::start().await;
    let admin = TestAdmin::generate();

    let cfg = {
        let mut cfg = get_configuration().expect("failed to read configuration");
        // the OS picks a free port
        cfg.application.port = 0;
        cfg.store.base_url = store_server.uri();
        cfg.store.timeout_milliseconds = 2000;
        cfg.admin.username = admin.username.clone();
        cfg.admin.password_hash = Secret::new(admin.password_hash());
        cfg
    };

    let app = Application::build(cfg).await.expect("failed to build app");
    let addr = format!("http://localhost:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        store_server,
        admin,
        client,
    }
}

pub fn check_redirect(
    resp: &reqwest::Response,
    location: &str,
) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}

/// A `leads` row as the store returns it
pub fn lead_row(
    id: i64,
    name: &str,
    followers: (u64, u64, u64),
    created_at: &str,
) -> Value {
    json!({
        "id": id,
        "company": format!("Empresa {id}"),
        "name": name,
        "email": format!("lead{id}@ejemplo.com"),
        "phone": "+54 11 4444-5555",
        "instagram": format!("@ig_{id}"),
        "instagram_followers": followers.0,
        "tiktok": null,
        "tiktok_followers": followers.1,
        "youtube": "",
        "youtube_subscribers": followers.2,
        "project_type": "Fotografía",
        "message": "Necesitamos fotos de producto.",
        "status": "nuevo",
        "created_at": created_at,
    })
}

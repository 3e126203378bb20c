use heres_studio::configuration::get_configuration;
use heres_studio::startup::Application;
use heres_studio::telemetry::get_subscriber;
use heres_studio::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // only records at `info` and above, unless overridden by RUST_LOG
    let subscriber = get_subscriber("heres-studio", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    tracing::info!(port = app.get_port(), "Listening");
    app.run_until_stopped().await?;
    Ok(())
}

use rblog_api::{Client, Config};
use rblog_app::{session::Session, telemetry, theme::Theme, App};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Renders one page of the blog: `rblog [PATH]`, default `/`.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = telemetry::init() {
        warn!("Logging was already initialized: {}", e);
    }
    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let client = Client::new(Some(Config::from_env()));
    info!("Using posts API at {}", client.config().base_url());

    let mut app = App::new(Arc::new(client), Session::from_env(), Theme::dark());
    app.navigate(&path);
    app.settle().await;
    match app.render() {
        Ok(page) => {
            println!("{}", page);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error rendering {}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

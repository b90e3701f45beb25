//! Helping Hand Server
//!
//! Server-rendered website for the Helping Hand charity: stories, static
//! information pages, a donate page with a payment QR code and a contact
//! form stored as one JSON file per submission.

mod error;
mod extractors;
mod handlers;
mod render;
mod routes;
mod settings;

use anyhow::{Context, Result};
use helping_hand_core::{SiteContent, SubmissionStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use render::Templates;
use settings::Settings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub templates: Arc<Templates>,
    pub submissions: Arc<SubmissionStore>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Helping Hand Server v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading settings...");
    let settings = Settings::load().context("Failed to load settings")?;
    info!(
        "Settings loaded: bind={}, data={}, static={}",
        settings.bind_address,
        settings.data_dir.display(),
        settings.static_dir.display()
    );

    let content = SiteContent::load(&settings.data_dir).context("Failed to load site content")?;

    let submissions_dir = settings.submissions_dir();
    let submissions =
        SubmissionStore::new(&submissions_dir).context("Failed to open submissions directory")?;
    info!("Submissions directory: {}", submissions_dir.display());

    let templates = Templates::new().context("Failed to compile templates")?;

    let state = AppState {
        content: Arc::new(content),
        templates: Arc::new(templates),
        submissions: Arc::new(submissions),
    };

    let app = routes::app(state, &settings.static_dir);

    let addr: SocketAddr = settings
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

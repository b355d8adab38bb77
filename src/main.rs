//! Standalone DevTools workspace host.

use anyhow::{Context, Result};
use clap::Parser;
use devtools_json::config::AppConfig;
use devtools_json::context::ProjectContext;
use devtools_json::routes::create_router;
use devtools_json::state::AppState;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use std::net::SocketAddr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// devtoolsd - a minimal dev server answering the Chrome DevTools workspace probe
#[derive(Parser, Debug)]
#[command(name = "devtoolsd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "DEVTOOLS_CONFIG",
        default_value = "config/devtools.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("devtoolsd v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file is optional, everything has defaults)
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();
    if config_path.exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("DEVTOOLS_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    let context = ProjectContext::from_workspace(&config.workspace)
        .context("failed to resolve workspace context")?;
    let options = config.workspace.plugin_options();
    let state = AppState::new(options, context);

    // Touch the identifier eagerly so cache-dir permission failures abort
    // startup instead of the first DevTools probe.
    let uuid = state
        .uuid_store()
        .get_or_create(state.options.uuid.as_deref())
        .context("failed to initialize DevTools project identifier")?;
    tracing::info!(
        %uuid,
        root = %state.context.root_path.display(),
        "Workspace ready"
    );

    if let Some(distro) = &state.wsl_distro {
        tracing::info!(%distro, "WSL detected, reporting UNC workspace root");
    }

    let app = create_router(state);

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

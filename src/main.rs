use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_core::workflows;
use study_helper::api::{self, AppState};
use study_helper::config::AppConfig;
use study_helper::provider::GeminiClient;

#[derive(Parser)]
#[command(name = "study-helper")]
#[command(about = "AI study helper: notes, flashcards, study mode and exam prep")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// List the registered workflows
    Workflows,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "study_helper=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; model calls will fail");
    }

    let provider = Arc::new(GeminiClient::from_config(&config));
    let app = api::create_router(AppState::new(provider, config));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Study helper listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await?,
        Some(Commands::Workflows) => {
            for workflow in workflows::get_all_workflows() {
                println!(
                    "{:<32} {:<44} {}",
                    workflow.id.as_str(),
                    workflow.name,
                    workflow.description
                );
            }
        }
        None => serve(3000).await?,
    }

    Ok(())
}

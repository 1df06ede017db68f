use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use user_directory::api::routes::{ApiDoc, routes};
use user_directory::api::server_state::ServerState;
use user_directory::application::app_configuration::{AppConfiguration, AppConfigurationBuilder};
use user_directory::infrastructure::in_memory_user_store::InMemoryUserStore;
use utoipa::OpenApi;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "🚀 Start the server")]
    Start,
    #[command(about = "Print the OpenAPI schema as JSON")]
    Openapi,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    dotenv().ok();
    let config = AppConfigurationBuilder::new().load_env().build();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Start) | None => {
            setup_logging(&config);
            debug_config(&config);

            let user_store = Arc::new(InMemoryUserStore::new());

            let addr = format!("{}:{}", config.host(), config.port());
            let listener = tokio::net::TcpListener::bind(&addr).await;
            let state = ServerState::new(config, user_store);

            match listener {
                Ok(listener) => {
                    tracing::info!("Server started at {}", &addr);
                    axum::serve(listener, routes(state))
                        .with_graceful_shutdown(shutdown_signal())
                        .await
                        .unwrap();
                }
                Err(e) => {
                    tracing::error!("Failed to bind to {}: {}", &addr, e);
                }
            }
        }
        Some(Commands::Openapi) => match ApiDoc::openapi().to_pretty_json() {
            Ok(schema) => println!("{}", schema),
            Err(e) => eprintln!("Failed to render the OpenAPI schema: {}", e),
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.unwrap();
        tracing::info!("Received Ctrl+C, starting graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .unwrap()
            .recv()
            .await;
        tracing::info!("Received terminate signal, starting graceful shutdown");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn setup_logging(config: &AppConfiguration) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(config.log_level())
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting user directory"
    );
}

fn debug_config(config: &AppConfiguration) {
    for (name, value) in config.envs() {
        tracing::debug!(env = %name, value = %value, "Configuration loaded successfully");
    }
}

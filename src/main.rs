//! patient-api entry point
//!
//! Loads `.env`, reads configuration from the environment (CLI flags win),
//! builds the MySQL store and serves the HTTP API until ctrl-c.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use patient_api::config::AppConfig;
use patient_api::http_server::HttpServer;
use patient_api::store::mysql::MySqlPatientStore;
use patient_api::store::PatientStore;

#[derive(Debug, Parser)]
#[command(name = "patient-api", version, about = "Patient records CRUD service")]
struct Args {
    /// Listen host (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("patient_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let store = Arc::new(MySqlPatientStore::connect(&config.database));
    // Fail-open: log the outcome, keep serving either way.
    store.ping().await;

    let server = HttpServer::with_config(config.http, store.clone() as Arc<dyn PatientStore>);
    let result = server.start().await;

    // Drain in-flight connections before exiting.
    store.close().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

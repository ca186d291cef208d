use clap::Parser;
use loanflow::domain::id::IdGenerator;
use loanflow::domain::ports::{ApplicationStore, SharedApplicationStore};
use loanflow::infrastructure::file_store::FileStore;
use loanflow::infrastructure::in_memory::InMemoryStore;
use loanflow::interfaces::http::{AppState, router};
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:12345")]
    listen: SocketAddr,

    /// Directory holding one record file per application (optional).
    /// If omitted, applications are kept in memory only.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let store: SharedApplicationStore = if let Some(data_dir) = cli.data_dir {
        tracing::info!(root = %data_dir.display(), "using file store");
        Arc::new(FileStore::open(data_dir).into_diagnostic()?)
    } else {
        tracing::info!("using in-memory store");
        Arc::new(InMemoryStore::new())
    };

    // Never re-issue an id that is already on disk.
    let last_id = store.last_id().await.into_diagnostic()?;
    let ids = Arc::new(IdGenerator::starting_after(last_id));

    let state = AppState::new(store, ids);
    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    tracing::info!(addr = %cli.listen, "listening");

    axum::serve(listener, router(state)).await.into_diagnostic()
}

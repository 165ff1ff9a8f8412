use reclog::commands::Cli;
use reclog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RECLOG_DEBUG alone still needs a filter that lets messages through.
    let default_filter = if is_debug_mode() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    Cli::menu()
}

use clap::Parser;
use console::style;
use video_catalog::cli::Cli;
use video_catalog::commands;
use video_catalog::core::config::resolve_storage_path;
use video_catalog::CatalogStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let path = resolve_storage_path(cli.file.as_deref(), cli.config.as_deref())
        .map_err(|e| e.to_string())?;
    tracing::info!(path = %path.display(), "using video file");

    let (mut store, warning) = CatalogStore::open(path);
    if let Some(w) = warning {
        eprintln!(
            "{} {}. Starting with empty list.",
            style("•").yellow().bold(),
            w
        );
    }

    commands::dispatch(cli.command, &mut store)
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("video_catalog=info,warn"),
        _ => EnvFilter::new("video_catalog=debug,info"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

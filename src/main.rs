use clap::Parser;
use marquee::core::config::{load_config, resolve};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "marquee", about = "Browse a movie catalog from the terminal")]
struct Args {
    /// Catalog API base URL (overrides MARQUEE_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Starting route, e.g. "#live-tv" or "#detail/42"
    #[arg(short, long)]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        Default::default()
    });
    let resolved = resolve(&config, args.base_url.as_deref(), args.route.as_deref());

    log::info!(
        "Marquee starting up against {} at {}",
        resolved.base_url,
        resolved.start_route
    );

    marquee::tui::run(resolved)
}

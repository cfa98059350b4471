use bookswap::core::config::{self, BookswapConfig, CliOverrides};
use bookswap::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookswap", about = "Browse secondhand book listings")]
struct Args {
    /// Config file to use instead of ~/.bookswap/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON catalog of listings (defaults to the built-in sample listings)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Hide reserved and sold listings
    #[arg(long)]
    available_only: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logging(args.verbose);
    log::info!("Bookswap starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            eprintln!("bookswap: {e}; using defaults");
            BookswapConfig::default()
        }
    };

    let cli = CliOverrides {
        data_file: args.data,
        available_only: args.available_only,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}

/// Writes `bookswap.log` into ~/.bookswap/, or the working directory if that fails.
fn init_logging(verbose: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let path = config::config_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("bookswap.log"))
        .unwrap_or_else(|| PathBuf::from("bookswap.log"));

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

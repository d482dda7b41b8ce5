use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use chronoline::{ConfigProvider, FileConfigProvider, LogEngine, TimelinePanel};

/// chronoline - a configurable timeline panel for dashboard hosts
#[derive(Parser, Debug)]
#[command(name = "chronoline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to load (defaults to the per-user config location)
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let provider = match cli.config_file {
        Some(path) => FileConfigProvider::new(path),
        None => FileConfigProvider::default_location()?,
    };
    info!("loading configuration from {}", provider.path().display());
    let raw = provider.load()?;

    let mut panel = TimelinePanel::new(LogEngine);
    let summary = panel.apply_value(&raw);

    if summary.items_upserted == 0 {
        warn!("configuration produced an empty timeline");
    }

    if let Some(title) = &summary.title {
        println!("{}", title);
    }
    println!(
        "{} item(s), {} group(s) ({} removed on this pass)",
        summary.items_upserted, summary.group_count, summary.items_removed
    );
    for item in panel.items().iter() {
        println!(
            "  [{}] {} start={} end={} group={}",
            item.id,
            item.content,
            item.start,
            item.end.map_or_else(|| "-".to_string(), |ms| ms.to_string()),
            item.group
                .as_ref()
                .map_or_else(|| "-".to_string(), |g| g.to_string()),
        );
    }

    Ok(())
}

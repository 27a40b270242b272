//! Admin dashboard main entry point

use adminweb_api::start_server;
use adminweb_config::Config;
use adminweb_core::Workspace;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "adminweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight admin dashboard with searchable, paginated record tables", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, from_file) = match Config::load_or_default(&args.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", e.severity(), e.to_details());
            anyhow::bail!("invalid configuration in {}", args.config.display());
        }
    };

    init_logger(&config);
    if from_file {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }

    let workspace = Workspace::from_config(&config);
    let rt = Runtime::new().context("failed to start the async runtime")?;
    rt.block_on(start_server(config, workspace))
        .context("server error")?;

    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_logger(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.logging.level.to_lowercase());
    env_logger::Builder::from_env(env).init();
}

//! Console demo of the `array3d` container.
mod cli;
mod config;
mod reader;
mod scenario;

use config::Config;
use reader::{read_config, ConfigReaderError};
use tracing::warn;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::parse_arguments();
    init_logging(cli.verbose);

    if cli.dump_default {
        println!("{}", toml::to_string_pretty(&Config::default())?);
        return Ok(());
    }

    let mut config = match read_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(ConfigReaderError::NoConfigFile) => {
            warn!("no config file found, using the default config");
            Config::default()
        }
        Err(err) => return Err(err.into()),
    };
    if cli.pretty {
        config.pretty = true;
    }

    let stdout = std::io::stdout();
    scenario::run(&config, &mut stdout.lock())?;
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use pwg::app::App;
use pwg::config::Config;
use pwg::error::AppResult;
use pwg::logging;
use pwg::screen::WidgetKind;

/// Small interactive page widgets in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pwg", version, about)]
struct Cli {
    /// Widget shown at startup; F1..F4 switch later.
    #[arg(value_enum, default_value_t = WidgetKind::Typeahead)]
    widget: WidgetKind,

    /// Config file, instead of the discovered default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level filter (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> AppResult<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = cli.load_config()?;
    logging::init(&config.log)?;

    let mut app = App::new_with_config(config, cli.widget)?;
    app.run().await
}

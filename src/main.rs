use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use study_companion::cli::{search_lines, Cli, Command};
use study_companion::config::Config;
use study_companion::logging::init_tracing;
use study_companion::ui::app::App;
use study_companion::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(view) = cli.view {
        config.ui.start_view = view;
    }

    match cli.command {
        Some(Command::Search { community, query }) => {
            for line in search_lines(&config, &query, community) {
                println!("{}", line);
            }
        }
        None => {
            let app = App::new(&config).context("Failed to load deck library")?;
            runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
                .context("Terminal UI failed")?;
        }
    }

    Ok(())
}

mod app;
mod cli;
mod event;
mod logging;
mod palette;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let mut cli_opts = cli::Cli::parse();
    let _log_guard = logging::init(cli_opts.verbose)?;

    if let Some(command) = cli_opts.command.take() {
        return cli::run(command, &cli_opts);
    }

    let config = cli_opts.load_config()?;
    let initial = palette::random_swatches(config.ui.seed_count);
    let mut app = app::App::new(&config, initial)?;
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    info!("exiting");

    result
}

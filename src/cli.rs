/// CLI argument parsing and command handling.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flowgrid::{Config, HeightPattern};

/// Largest item count the `layout` command will lay out.
pub const MAX_LAYOUT_COUNT: usize = 100_000;

#[derive(Parser, Debug)]
#[command(
    name = "flowgrid",
    version,
    about = "flowgrid - A terminal color grid with a column flow layout"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the number of columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Start with this many random swatches
    #[arg(long)]
    pub seed: Option<usize>,

    /// Override the cell height pattern
    #[arg(long, value_enum)]
    pub pattern: Option<PatternArg>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the computed cell frames for a container width
    Layout {
        #[arg(short = 'w', long = "width")]
        width: f64,
        #[arg(short = 'n', long = "count")]
        count: usize,
        #[arg(long, value_enum)]
        pattern: Option<PatternArg>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    Fixed,
    Alternating,
}

impl From<PatternArg> for HeightPattern {
    fn from(value: PatternArg) -> Self {
        match value {
            PatternArg::Fixed => HeightPattern::Fixed,
            PatternArg::Alternating => HeightPattern::Alternating,
        }
    }
}

impl Cli {
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    /// Loads the config file and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_from(&self.config_path()?)?;
        if let Some(columns) = self.columns {
            config.grid.cell_count = columns;
        }
        if let Some(seed) = self.seed {
            config.ui.seed_count = seed;
        }
        if let Some(pattern) = self.pattern {
            config.ui.height_pattern = pattern.into();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Execute a non-interactive command.
pub fn run(command: Command, cli_opts: &Cli) -> Result<()> {
    match command {
        Command::Layout {
            width,
            count,
            pattern,
        } => handle_layout(width, count, pattern, &cli_opts.load_config()?),
        Command::Config {
            command: ConfigCommand::Path,
        } => {
            println!("{}", cli_opts.config_path()?.display());
            Ok(())
        }
        Command::Config {
            command: ConfigCommand::Show,
        } => {
            print!("{}", cli_opts.load_config()?.to_toml()?);
            Ok(())
        }
        Command::Config {
            command: ConfigCommand::Init { force },
        } => handle_config_init(&cli_opts.config_path()?, force),
    }
}

fn handle_layout(
    width: f64,
    count: usize,
    pattern: Option<PatternArg>,
    config: &Config,
) -> Result<()> {
    if !width.is_finite() || width < 0.0 {
        anyhow::bail!("Width must be a non-negative number, got {width}");
    }
    if count > MAX_LAYOUT_COUNT {
        anyhow::bail!("Count must be at most {MAX_LAYOUT_COUNT}, got {count}");
    }
    let layout = config.grid_layout()?;
    let pattern = pattern.map(HeightPattern::from).unwrap_or(config.ui.height_pattern);
    let policy = pattern.policy();
    let params = layout.params();
    println!(
        "columns={} padding={:.2} cell_width={:.2}",
        params.cell_count(),
        params.padding_width(),
        params.cell_width(width)
    );
    for (index, frame) in layout.frames(count, width, policy.as_ref()).iter().enumerate() {
        println!(
            "{index:>4}  x={:.2} y={:.2} w={:.2} h={:.2}",
            frame.x, frame.y, frame.width, frame.height
        );
    }
    println!(
        "content_height={:.2}",
        layout.content_height(count, width, policy.as_ref())
    );
    Ok(())
}

fn handle_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!(
            "Config file '{}' already exists. Use --force to overwrite.",
            path.display()
        );
        return Ok(());
    }
    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

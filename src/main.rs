use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use bitmap_editor::{Editor, EditorConfig, OutputFormat};
use clap::Parser;

/// Run a file of bitmap editor commands
#[derive(Parser, Debug)]
#[command(name = "bitmap_editor", version, about)]
struct Cli {
    /// Command file, one command per line
    file: PathBuf,

    /// JSON editor config; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format of the `S` command
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not echo each command before running it
    #[arg(short, long)]
    quiet: bool,

    /// Stop at the first rejected command and exit with an error
    #[arg(long)]
    stop_on_error: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    if cli.quiet {
        config.echo_commands = false;
    }
    if cli.stop_on_error {
        config.stop_on_error = true;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }

    let file = File::open(&cli.file)
        .with_context(|| format!("please provide a correct file: {}", cli.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut editor = Editor::new(config);
    let summary = editor
        .run(BufReader::new(file), &mut out)
        .with_context(|| format!("failed while running {}", cli.file.display()))?;

    log::debug!("{} commands, {} rejected", summary.executed, summary.failed);
    Ok(())
}

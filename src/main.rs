mod clipboard;
mod config;
mod controller;
mod error;
mod file_commands;
mod help;
mod insert_commands;
mod key_handler;
mod navigation;
mod normal_commands;
mod prompt;
mod selection;
mod text_buffer;
mod view;

use anyhow::Result;
use clap::Parser;
use config::RcLoader;
use controller::Controller;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrawl", version, about = "A small modal terminal text editor")]
struct Cli {
    /// File to open
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file, never stdout - the terminal belongs to the editor.
    let log_dir = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"));
    let file_appender = tracing_appender::rolling::never(&log_dir, ".scrawl.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_env("SCRAWL_LOG").unwrap_or_else(|_| EnvFilter::new("scrawl=info")),
        )
        .init();

    tracing::info!("scrawl starting");

    let editor_config = RcLoader::load_config();

    let mut controller = match cli.file {
        Some(path) => Controller::open(path, &editor_config)?,
        None => Controller::new(&editor_config),
    };

    controller.run()?;
    Ok(())
}

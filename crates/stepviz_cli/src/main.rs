use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use stepviz_steps::{EngineConfig, InputError, Playback, Step, generate};
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Format};

mod args;
mod render;

fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    let Some(path) = path else {
        print!("{contents}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "trace written");
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = EngineConfig {
        speed: args.speed,
        ..Default::default()
    };
    let request = args.command.into_request()?;
    let algorithm = request.algorithm();
    let steps = generate(&request, &config)?;

    let selected: Vec<Step> = match args.step {
        Some(index) => {
            let mut playback = Playback::new(steps);
            playback.seek(index).cloned().into_iter().collect()
        }
        None => steps,
    };

    let contents = match args.format {
        Format::Text => render::text(&selected),
        Format::Json => render::json(algorithm, &selected)?,
    };
    write_output(args.output.as_deref(), &contents)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            if e.downcast_ref::<InputError>().is_some() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}

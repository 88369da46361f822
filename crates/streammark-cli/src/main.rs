use anyhow::{Context, Result};
use std::{env, io::Read, path::Path, process};
use streammark_config::Config;
use streammark_engine::parsing::snapshot;

mod editor;
mod sample;
mod tui;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let tree = args.iter().skip(1).any(|a| a == "--tree");
    let inputs: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--tree").collect();

    match inputs.as_slice() {
        [input] => render(input, tree),
        [] if !tree => live_preview(),
        _ => {
            eprintln!("Usage: {} [--tree] [<file>|-]", args[0]);
            eprintln!("With no file, opens the live preview.");
            process::exit(1);
        }
    }
}

/// Renders a file, or stdin for `-`, to stdout.
fn render(input: &str, tree: bool) -> Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
    };

    let doc = streammark_engine::parse_document(&text);
    if tree {
        println!("{}", snapshot::normalize(&doc));
    } else {
        print!("{}", streammark_engine::parsing::html::emit(&doc));
    }
    Ok(())
}

fn live_preview() -> Result<()> {
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let sample = match &config.sample_path {
        Some(path) => read_sample(path)?,
        None => sample::SAMPLE_MARKDOWN.to_string(),
    };

    tui::run(sample, config.stream_interval())
}

fn read_sample(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file {}", path.display()))
}

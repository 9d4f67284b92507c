use anyhow::{Context, Result};
use outfit_lens_config::Config;
use outfit_lens_engine::report::outline;
use outfit_lens_engine::{
    Block, DEFAULT_MAX_IMAGE_BYTES, ImageUpload, SAMPLE_REPORT, classify, effective_prompt,
};
use std::io::{self, Read};
use std::path::PathBuf;
use std::{env, process};

const USAGE: &str = "[--json] [--sample | --prompt | --image <IMAGE> | <REPORT_FILE> | -]";

/// Where the report text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Sample,
    Stdin,
    File(PathBuf),
    /// Fall back to `report_path` from the config file.
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Classify { source: Source, json: bool },
    Prompt,
    CheckImage(PathBuf),
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut json = false;
    let mut command = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let next = match arg.as_str() {
            "--json" => {
                json = true;
                continue;
            }
            "--sample" => Command::Classify {
                source: Source::Sample,
                json: false,
            },
            "--prompt" => Command::Prompt,
            "--image" => match iter.next() {
                Some(path) => Command::CheckImage(PathBuf::from(path)),
                None => return Err("--image requires a path".to_string()),
            },
            "-" => Command::Classify {
                source: Source::Stdin,
                json: false,
            },
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path => Command::Classify {
                source: Source::File(PathBuf::from(path)),
                json: false,
            },
        };
        if command.replace(next).is_some() {
            return Err("only one input may be given".to_string());
        }
    }

    Ok(match command.unwrap_or(Command::Classify {
        source: Source::Config,
        json: false,
    }) {
        Command::Classify { source, .. } => Command::Classify { source, json },
        other => other,
    })
}

fn read_report(source: &Source, config: Option<&Config>) -> Result<String> {
    match source {
        Source::Sample => Ok(SAMPLE_REPORT.to_string()),
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read report from stdin")?;
            Ok(text)
        }
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report '{}'", path.display())),
        Source::Config => {
            let path = config
                .and_then(|c| c.report_path.as_ref())
                .context("No report file provided and no report_path in config")?;
            log::info!("Using report path from config: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read report '{}'", path.display()))
        }
    }
}

fn render(blocks: &[Block], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(blocks)? + "\n")
    } else {
        Ok(outline(blocks))
    }
}

fn run(command: Command, config: Option<&Config>) -> Result<String> {
    match command {
        Command::Prompt => {
            let custom = config.and_then(Config::custom_prompt);
            Ok(format!("{}\n", effective_prompt(custom)))
        }
        Command::CheckImage(path) => {
            let max_bytes = config
                .map(|c| c.max_image_bytes)
                .unwrap_or(DEFAULT_MAX_IMAGE_BYTES);
            let upload = ImageUpload::from_path(&path, max_bytes)?;
            Ok(format!(
                "{}: {} ({} byte data URL)\n",
                path.display(),
                upload.mime_type(),
                upload.data_url().len()
            ))
        }
        Command::Classify { source, json } => {
            let text = read_report(&source, config)?;
            let blocks = classify(&text);
            log::info!("Classified {} lines", blocks.len());
            render(&blocks, json)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("outfit-lens-cli");

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };

    match run(command, config.as_ref()) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            if config.is_none() {
                eprintln!("Usage: {program} {USAGE}");
                eprintln!("Or set report_path in {}", config_path.display());
            }
            process::exit(1);
        }
    }
}

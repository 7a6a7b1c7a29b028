use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use downtown_config::{Config, OutputFormat};
use downtown_syntax::{UnclosedDelimiters, lex, parse_with_options};

mod render;

#[derive(Parser)]
#[command(name = "downtown")]
#[command(about = "Parse inline markdown and print the resulting syntax tree")]
struct Args {
    /// Markdown file to read; stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Output format (defaults to the config file, then `outline`)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// What to do with delimiters that never found a partner
    #[arg(long, value_enum)]
    unclosed: Option<UnclosedArg>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the effective --format/--unclosed settings in the config file and exit
    #[arg(long)]
    write_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Outline,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Outline => OutputFormat::Outline,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnclosedArg {
    Preserve,
    Text,
}

impl From<UnclosedArg> for UnclosedDelimiters {
    fn from(arg: UnclosedArg) -> Self {
        match arg {
            UnclosedArg::Preserve => UnclosedDelimiters::Preserve,
            UnclosedArg::Text => UnclosedDelimiters::AsText,
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?
            .with_context(|| format!("config file {} does not exist", path.display())),
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?)
        }
    }
}

/// Command line flags take precedence over the config file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(format) = args.format {
        config.format = format.into();
    }
    if let Some(unclosed) = args.unclosed {
        config.unclosed_delimiters = unclosed.into();
    }
}

/// Stores the flags on top of the existing file, which may not exist yet.
fn write_config(args: &Args) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from_path(&config_path)?.unwrap_or_default();
    apply_overrides(&mut config, args);

    match &args.config {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    log::info!("config written to {}", config_path.display());
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();

    if args.write_config {
        return write_config(&args);
    }

    let mut config = load_config(args.config.as_ref())?;
    apply_overrides(&mut config, &args);

    let input = read_input(args.file.as_ref())?;
    log::info!("read {} bytes", input.len());

    let output = if args.tokens {
        render::render_tokens(&lex(&input))
    } else {
        let nodes = parse_with_options(&input, config.parse_options());
        render::render_nodes(&nodes, config.format)?
    };

    print!("{output}");
    Ok(())
}

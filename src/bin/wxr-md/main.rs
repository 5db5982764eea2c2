use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spdlog::{info, warn};

use wxr_md::archive::ARCHIVE_NAME;
use wxr_md::config::{read_config, Config, ListOption, PostOptions};
use wxr_md::convert_file;
use wxr_md::logger::configure_logger;

#[derive(Parser, Debug)]
#[command(version, about = "Converts a WordPress export into a tar.gz of Markdown files", long_about = None)]
struct Args {
    /// WordPress export (WXR) file
    #[arg(short, long)]
    input: PathBuf,

    /// Archive to write
    #[arg(short, long, default_value = ARCHIVE_NAME)]
    output: PathBuf,

    /// TOML file with conversion and log options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also convert pages, with the default page options if the config has none
    #[arg(long)]
    pages: bool,

    /// How categories and tags are written, overrides the config
    #[arg(short, long)]
    list_option: Option<ListArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListArg {
    /// One `  - item` line per entry
    Markdown,
    /// Entries joined with `, `
    #[value(name = "commaSeparated")]
    CommaSeparated,
}

impl From<ListArg> for ListOption {
    fn from(value: ListArg) -> Self {
        match value {
            ListArg::Markdown => ListOption::Markdown,
            ListArg::CommaSeparated => ListOption::CommaSeparated,
        }
    }
}

fn open_config(path: Option<&PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("wxr-md").join("log").join("wxr-md.log"));
        }
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = open_config(args.config.as_ref())?;

    if let Some(ref log) = config.log {
        if let Err(err) = configure_logger(log) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    if args.pages && config.options.pages.is_none() {
        config.options.pages = Some(PostOptions::default_pages());
    }
    if let Some(list_option) = args.list_option {
        config.options.list_option = list_option.into();
    }

    info!("Converting {}", args.input.display());
    let bytes = convert_file(&args.input, &config.options).await?;

    tokio::fs::write(&args.output, &bytes)
        .await
        .with_context(|| format!("Error writing {}", args.output.display()))?;
    info!("Wrote {} ({} bytes)", args.output.display(), bytes.len());

    Ok(())
}

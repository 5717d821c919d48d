use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kitab::config::Config;
use kitab::i18n::{IdentityTranslator, Language};
use kitab::logging::init_tracing;
use kitab::ui::runtime;

#[derive(Parser)]
#[command(
    name = "kitab",
    version,
    about = "Terminal browser for a remote book catalog",
    long_about = None
)]
struct Cli {
    /// Books endpoint URL (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Interface language at startup: english or urdu
    #[arg(long, value_enum)]
    language: Option<CliLanguage>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliLanguage {
    English,
    Urdu,
}

impl From<CliLanguage> for Language {
    fn from(value: CliLanguage) -> Self {
        match value {
            CliLanguage::English => Language::English,
            CliLanguage::Urdu => Language::Urdu,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };

    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint_url = endpoint;
        config.validate().context("validating endpoint override")?;
    }

    let language = cli
        .language
        .map(Language::from)
        .unwrap_or(config.ui.default_language);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime::run(&config, language, Box::new(IdentityTranslator), rt.handle())
        .context("running UI")?;

    Ok(())
}

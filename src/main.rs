//! Word grid engine (default binary).
//!
//! Loads the word list, starts or resumes a game and serves the JSON line protocol
//! on stdin/stdout. Logs go to stderr; filter them with `RUST_LOG`.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordgrid::adapter::{serve_stdio, AdapterConfig, Session};
use wordgrid::core::{Dictionary, JsonFileStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,wordgrid=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AdapterConfig::from_env();
    info!(?config, "starting");

    let dictionary = Dictionary::load(&config.dictionary_path).with_context(|| {
        format!(
            "loading word list (set WORDGRID_DICTIONARY to override {})",
            config.dictionary_path.display()
        )
    })?;
    if dictionary.is_empty() {
        bail!("word list {} is empty", config.dictionary_path.display());
    }
    info!(words = dictionary.len(), "dictionary loaded");

    let store = JsonFileStore::new(&config.save_path);
    let mut session = Session::new(Arc::new(dictionary), store);

    let resumed = config.resume
        && session
            .resume()
            .with_context(|| format!("loading {}", config.save_path.display()))?;
    if !resumed {
        session.new_game(config.teams)?;
    }

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(serve_stdio(&mut session))
}

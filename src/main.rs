use std::io::{self, Write};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dictree::dictionary::{DictionaryIndex, DictionaryLoader, OrderedTree, PrefixTrie};
use dictree::{menu, report, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let log_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("dictree={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut tree = OrderedTree::new();
    let mut trie = PrefixTrie::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "========================================")?;
    writeln!(out, "  DICTIONARY SEARCH PROGRAM INITIALIZED")?;
    writeln!(out, "========================================")?;

    // Sin diccionario se continúa con índices vacíos
    let mut indexes: [&mut dyn DictionaryIndex; 2] = [&mut tree, &mut trie];
    match DictionaryLoader::load_file(&config.dictionary, &mut indexes) {
        Ok(stats) => {
            writeln!(out, "Successfully loaded {} words from dictionary!", stats.loaded)?;
            writeln!(out, "========================================")?;
            writeln!(out)?;
        }
        Err(e) => warn!("{}", e),
    }

    if let Some(ref word) = config.search {
        report::search_word(&mut out, &tree, &trie, word)?;
        return Ok(());
    }

    let cases = config.performance_cases();
    menu::run(io::stdin().lock(), &mut out, &tree, &trie, &cases)?;
    Ok(())
}

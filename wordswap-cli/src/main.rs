use anyhow::{Context, bail};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordswap_core::config::AppConfig;
use wordswap_engine::engine::{InsertOutcome, SearchOutcome};
use wordswap_platform::test::{MemoryDocument, StdoutPresenter};
use wordswap_runtime::config_store::ConfigStore;
use wordswap_runtime::defaults::default_app_config;
use wordswap_runtime::runtime_engine::{PanelSession, build_controller_from_config};

const USAGE: &str = "usage:
  wordswap-cli lookup <word>
  wordswap-cli demo <text> <replacement>
  wordswap-cli config-init";

fn config_store() -> ConfigStore {
    let path = std::env::var("WORDSWAP_CONFIG").unwrap_or_else(|_| "wordswap.json".into());
    ConfigStore::at_path(PathBuf::from(path))
}

fn load_config() -> anyhow::Result<AppConfig> {
    let mut cfg = config_store().load_or_default()?;
    if let Ok(base_url) = std::env::var("DATAMUSE_BASE_URL") {
        cfg.lookup.base_url = base_url;
    }
    Ok(cfg)
}

async fn lookup(word: &str) -> anyhow::Result<()> {
    let cfg = load_config()?;
    let controller = build_controller_from_config(&cfg, None, Arc::new(StdoutPresenter))?;

    match controller.search(word).await {
        SearchOutcome::Found(_) => Ok(()),
        other => bail!("lookup for {word:?} did not complete: {other:?}"),
    }
}

/// Types `text` into an in-memory document, lets the detection loop pick up the
/// last word, then swaps in `replacement`.
async fn demo(text: &str, replacement: &str) -> anyhow::Result<()> {
    let cfg = load_config()?;
    let doc = Arc::new(MemoryDocument::new(""));
    let session = PanelSession::start(&cfg, Some(doc.clone()), Arc::new(StdoutPresenter))?;

    doc.type_text(text);

    let controller = session.controller().clone();
    let wait = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            tokio::time::sleep(cfg.detection.poll_interval()).await;
            let state = controller.state();
            if !state.last_detected_word().is_empty() && !state.is_searching() {
                return state.last_detected_word();
            }
        }
    })
    .await;

    let detected = match wait {
        Ok(word) => word,
        Err(_) => {
            session.shutdown().await;
            bail!("no word detected in {text:?}");
        }
    };
    log::info!("detected '{detected}'");

    let outcome = controller.insert_word(replacement).await;
    session.shutdown().await;

    if outcome == InsertOutcome::Failed {
        bail!("insert failed");
    }
    println!("document: {}", doc.text());
    Ok(())
}

fn config_init() -> anyhow::Result<()> {
    let store = config_store();
    if store.path().exists() {
        bail!("config already exists at {}", store.path().display());
    }
    store
        .save(&default_app_config())
        .with_context(|| format!("write {}", store.path().display()))?;
    println!("wrote {}", store.path().display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordswap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["lookup", word] => lookup(word).await,
        ["demo", text, replacement] => demo(text, replacement).await,
        ["config-init"] => config_init(),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

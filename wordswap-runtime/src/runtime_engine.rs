use std::sync::Arc;

use wordswap_core::config::AppConfig;
use wordswap_engine::detection::{DetectionHandle, spawn_detection_loop};
use wordswap_engine::engine::{ControllerConfig, ThesaurusController};
use wordswap_engine::session::SessionState;
use wordswap_engine::traits::{DocumentHost, LexicalService, Presenter};

use crate::lexicon::DatamuseLexicon;

/// Build a controller from config + the host/presenter supplied by the embedder.
pub fn build_controller_from_config(
    cfg: &AppConfig,
    host: Option<Arc<dyn DocumentHost>>,
    presenter: Arc<dyn Presenter>,
) -> anyhow::Result<ThesaurusController> {
    let lexicon: Arc<dyn LexicalService> = Arc::new(DatamuseLexicon::new(&cfg.lookup)?);

    Ok(ThesaurusController::new(
        ControllerConfig::from(cfg),
        SessionState::new(cfg.detection.auto_fetch_enabled),
        host,
        lexicon,
        presenter,
    ))
}

/// A running panel: the controller plus its detection loop, if a document is attached.
pub struct PanelSession {
    controller: Arc<ThesaurusController>,
    detection: Option<DetectionHandle>,
}

impl PanelSession {
    pub fn start(
        cfg: &AppConfig,
        host: Option<Arc<dyn DocumentHost>>,
        presenter: Arc<dyn Presenter>,
    ) -> anyhow::Result<Self> {
        let has_host = host.is_some();
        let controller = Arc::new(build_controller_from_config(cfg, host, presenter)?);
        Ok(Self::with_controller(controller, cfg, has_host))
    }

    /// Starts a session around an already-built controller.
    pub fn with_controller(
        controller: Arc<ThesaurusController>,
        cfg: &AppConfig,
        has_host: bool,
    ) -> Self {
        controller.set_auto_fetch(cfg.detection.auto_fetch_enabled);

        // Without a document there is no caret to follow.
        let detection = has_host
            .then(|| spawn_detection_loop(controller.clone(), cfg.detection.poll_interval()));
        if !has_host {
            log::info!("no document attached; caret detection disabled");
        }

        Self {
            controller,
            detection,
        }
    }

    pub fn controller(&self) -> &Arc<ThesaurusController> {
        &self.controller
    }

    pub fn is_detecting(&self) -> bool {
        self.detection.as_ref().is_some_and(|d| !d.is_finished())
    }

    pub async fn shutdown(self) {
        if let Some(detection) = self.detection {
            detection.shutdown().await;
        }
    }
}

use crate::lookup::fetch_word_data;
use crate::session::{CallPolicy, SearchGuard, SessionState};
use crate::traits::{DocumentHost, LexicalService, Presenter};
use anyhow::Context;
use std::sync::Arc;
use thiserror::Error;
use wordswap_core::config::{AppConfig, RelationLimits};
use wordswap_core::text::{extract_word_before_cursor, first_selected_word, is_detectable_word};
use wordswap_core::types::{LookupResult, QueryError, WordQuery};

pub const MSG_EMPTY_QUERY: &str = "Please enter a word to search";
pub const MSG_LOOKUP_FAILED: &str = "Failed to fetch synonyms. Please try again.";
pub const MSG_SELECTION_FAILED: &str =
    "Could not get selected text. Please select a word in your document.";
pub const MSG_INSERT_FAILED: &str = "Failed to insert word. Please try again.";

// Searched by "use selection" when no document is attached.
const SAMPLE_WORD: &str = "happy";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no document host attached")]
    NoHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub limits: RelationLimits,
    pub min_word_len: usize,
}

impl From<&AppConfig> for ControllerConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            limits: cfg.lookup.limits.clone(),
            min_word_len: cfg.detection.min_word_len,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            limits: RelationLimits::default(),
            min_word_len: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(LookupResult),
    Rejected(QueryError),
    NothingSelected,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Disabled,
    NoHost,
    Busy,
    SelectionActive,
    NoWord,
    Unchanged,
    Detected(String),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    NoHost,
    ReplacedOccurrence,
    ReplacedSelection,
    /// The detected word is only part of longer words; the document is left alone.
    NoMatch,
    Failed,
}

/// Ends its search on every exit path and hides the loading indicator once no
/// other lookup is still in flight.
struct LoadingIndicator<'a> {
    presenter: &'a dyn Presenter,
    busy: Option<SearchGuard>,
}

impl<'a> LoadingIndicator<'a> {
    fn show(presenter: &'a dyn Presenter, busy: SearchGuard) -> Self {
        presenter.set_loading(true);
        Self {
            presenter,
            busy: Some(busy),
        }
    }
}

impl Drop for LoadingIndicator<'_> {
    fn drop(&mut self) {
        if self.busy.take().is_some_and(SearchGuard::finish) {
            self.presenter.set_loading(false);
        }
    }
}

pub struct ThesaurusController {
    cfg: ControllerConfig,
    state: SessionState,
    host: Option<Arc<dyn DocumentHost>>,
    lexicon: Arc<dyn LexicalService>,
    presenter: Arc<dyn Presenter>,
}

impl ThesaurusController {
    pub fn new(
        cfg: ControllerConfig,
        state: SessionState,
        host: Option<Arc<dyn DocumentHost>>,
        lexicon: Arc<dyn LexicalService>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            cfg,
            state,
            host,
            lexicon,
            presenter,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn host(&self) -> Result<&dyn DocumentHost, EngineError> {
        self.host.as_deref().ok_or(EngineError::NoHost)
    }

    pub fn set_auto_fetch(&self, enabled: bool) {
        log::info!("auto-fetch {}", if enabled { "enabled" } else { "disabled" });
        self.state.set_auto_fetch_enabled(enabled);
        self.presenter.show_auto_fetch_status(enabled);
    }

    /// Looks up a word typed by the user.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let query = match WordQuery::parse(input) {
            Ok(q) => q,
            Err(e) => {
                log::debug!("rejected query {input:?}: {e}");
                self.presenter.show_error(MSG_EMPTY_QUERY);
                return SearchOutcome::Rejected(e);
            }
        };

        let busy = self.state.begin_search();
        self.run_lookup(&query, CallPolicy::Foreground, busy).await
    }

    /// Searches the first word of the current selection.
    pub async fn use_selection(&self) -> SearchOutcome {
        let Ok(host) = self.host() else {
            self.presenter.set_query_text(SAMPLE_WORD);
            return self.search(SAMPLE_WORD).await;
        };

        let selection = match host.selection_text().await {
            Ok(s) => s,
            Err(e) => {
                CallPolicy::Foreground.report(self.presenter.as_ref(), MSG_SELECTION_FAILED, &e);
                return SearchOutcome::Failed;
            }
        };

        match first_selected_word(&selection) {
            Some(word) => {
                self.presenter.set_query_text(&word);
                self.search(&word).await
            }
            None => SearchOutcome::NothingSelected,
        }
    }

    /// One pass of caret word detection. Never reports errors to the user.
    pub async fn detect_cycle(&self) -> CycleOutcome {
        if !self.state.auto_fetch_enabled() {
            return CycleOutcome::Disabled;
        }
        if self.state.is_searching() {
            return CycleOutcome::Busy;
        }
        let Ok(host) = self.host() else {
            return CycleOutcome::NoHost;
        };

        let read = async {
            let selection = host.selection_text().await.context("read selection")?;
            let paragraph = host
                .first_paragraph_text()
                .await
                .context("read first paragraph")?;
            anyhow::Ok((selection, paragraph))
        };
        let (selection, paragraph) = match read.await {
            Ok(texts) => texts,
            Err(e) => {
                CallPolicy::Background.report(self.presenter.as_ref(), MSG_LOOKUP_FAILED, &e);
                return CycleOutcome::Failed;
            }
        };

        if !selection.is_empty() {
            return CycleOutcome::SelectionActive;
        }

        // The host does not expose the caret offset, so the end of the first
        // paragraph stands in for it.
        let word = extract_word_before_cursor(&paragraph, paragraph.chars().count());
        if !is_detectable_word(&word, self.cfg.min_word_len) {
            return CycleOutcome::NoWord;
        }
        if word == self.state.last_detected_word() {
            return CycleOutcome::Unchanged;
        }
        let Ok(query) = WordQuery::parse(&word) else {
            return CycleOutcome::NoWord;
        };

        // A manual search may have started while the host was being read.
        let Some(busy) = self.state.try_begin_search() else {
            return CycleOutcome::Busy;
        };

        log::debug!("detected '{word}'");
        self.state.set_last_detected_word(word.clone());
        self.presenter.set_query_text(&word);

        match self.run_lookup(&query, CallPolicy::Background, busy).await {
            SearchOutcome::Found(_) => CycleOutcome::Detected(word),
            _ => CycleOutcome::Failed,
        }
    }

    /// Puts `chosen` into the document in place of the detected word or the selection.
    pub async fn insert_word(&self, chosen: &str) -> InsertOutcome {
        let Ok(host) = self.host() else {
            self.presenter.notice(&format!(
                "Word to insert: \"{chosen}\"\n\nNote: insertion works when a document is attached."
            ));
            return InsertOutcome::NoHost;
        };

        match self.replace_in_document(host, chosen).await {
            Ok(outcome) => outcome,
            Err(e) => {
                CallPolicy::Foreground.report(self.presenter.as_ref(), MSG_INSERT_FAILED, &e);
                InsertOutcome::Failed
            }
        }
    }

    async fn replace_in_document(
        &self,
        host: &dyn DocumentHost,
        chosen: &str,
    ) -> anyhow::Result<InsertOutcome> {
        let paragraph = host
            .first_paragraph_text()
            .await
            .context("read first paragraph")?;
        let last = self.state.last_detected_word();

        if !last.is_empty() && paragraph.to_lowercase().contains(&last.to_lowercase()) {
            let matches = host
                .find_whole_word(&last, true)
                .await
                .with_context(|| format!("search for '{last}'"))?;

            // The most recent occurrence is the one the user just typed.
            if let Some(target) = matches.last() {
                host.replace_occurrence(target, chosen)
                    .await
                    .context("replace occurrence")?;
                self.state.set_last_detected_word(chosen.to_lowercase());
                log::info!("replaced '{last}' with '{chosen}'");
                return Ok(InsertOutcome::ReplacedOccurrence);
            }

            log::debug!("'{last}' only occurs inside longer words; nothing replaced");
            return Ok(InsertOutcome::NoMatch);
        }

        host.replace_selection(chosen)
            .await
            .context("replace selection")?;
        log::info!("inserted '{chosen}' at selection");
        Ok(InsertOutcome::ReplacedSelection)
    }

    async fn run_lookup(
        &self,
        query: &WordQuery,
        policy: CallPolicy,
        busy: SearchGuard,
    ) -> SearchOutcome {
        let _loading = LoadingIndicator::show(self.presenter.as_ref(), busy);
        self.presenter.hide_error();
        self.presenter.clear_results();

        match fetch_word_data(self.lexicon.as_ref(), &self.cfg.limits, query).await {
            Ok(result) => {
                log::debug!("'{query}': {} synonyms", result.synonyms.len());
                self.presenter.render_results(query, &result);
                SearchOutcome::Found(result)
            }
            Err(e) => {
                policy.report(self.presenter.as_ref(), MSG_LOOKUP_FAILED, &e);
                SearchOutcome::Failed
            }
        }
    }
}

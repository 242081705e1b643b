#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Notify, Semaphore};
use wordswap_core::types::{LookupResult, Relation, WordQuery};
use wordswap_engine::traits::{DocumentHost, LexicalService, MatchHandle, Presenter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading(bool),
    Error(String),
    HideError,
    Clear,
    Render(String, LookupResult),
    Query(String),
    AutoFetch(bool),
    Notice(String),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Mutex<Vec<ViewEvent>>,
}

impl RecordingPresenter {
    fn push(&self, ev: ViewEvent) {
        self.events.lock().unwrap().push(ev);
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn rendered_queries(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Render(q, _) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_loading(&self) -> Option<bool> {
        self.events.lock().unwrap().iter().rev().find_map(|e| match e {
            ViewEvent::Loading(b) => Some(*b),
            _ => None,
        })
    }

    pub fn contains(&self, ev: &ViewEvent) -> bool {
        self.events.lock().unwrap().contains(ev)
    }
}

impl Presenter for RecordingPresenter {
    fn set_loading(&self, loading: bool) {
        self.push(ViewEvent::Loading(loading));
    }
    fn show_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.into()));
    }
    fn hide_error(&self) {
        self.push(ViewEvent::HideError);
    }
    fn clear_results(&self) {
        self.push(ViewEvent::Clear);
    }
    fn render_results(&self, query: &WordQuery, result: &LookupResult) {
        self.push(ViewEvent::Render(query.as_str().into(), result.clone()));
    }
    fn set_query_text(&self, text: &str) {
        self.push(ViewEvent::Query(text.into()));
    }
    fn show_auto_fetch_status(&self, enabled: bool) {
        self.push(ViewEvent::AutoFetch(enabled));
    }
    fn notice(&self, message: &str) {
        self.push(ViewEvent::Notice(message.into()));
    }
}

/// Host whose texts and search results are set by the test.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub selection: Mutex<String>,
    pub paragraph: Mutex<String>,
    pub matches: Mutex<Vec<MatchHandle>>,
    pub failing: AtomicBool,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedHost {
    pub fn with_paragraph(text: &str) -> Self {
        let host = Self::default();
        host.set_paragraph(text);
        host
    }

    pub fn set_paragraph(&self, text: &str) {
        *self.paragraph.lock().unwrap() = text.into();
    }

    pub fn set_selection(&self, text: &str) {
        *self.selection.lock().unwrap() = text.into();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("host context unavailable");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentHost for ScriptedHost {
    async fn selection_text(&self) -> anyhow::Result<String> {
        self.check()?;
        Ok(self.selection.lock().unwrap().clone())
    }

    async fn first_paragraph_text(&self) -> anyhow::Result<String> {
        self.check()?;
        Ok(self.paragraph.lock().unwrap().clone())
    }

    async fn replace_selection(&self, text: &str) -> anyhow::Result<()> {
        self.check()?;
        self.calls.lock().unwrap().push(format!("replace_selection:{text}"));
        Ok(())
    }

    async fn find_whole_word(
        &self,
        word: &str,
        case_insensitive: bool,
    ) -> anyhow::Result<Vec<MatchHandle>> {
        self.check()?;
        self.calls
            .lock()
            .unwrap()
            .push(format!("find:{word}:{case_insensitive}"));
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn replace_occurrence(&self, handle: &MatchHandle, text: &str) -> anyhow::Result<()> {
        self.check()?;
        self.calls
            .lock()
            .unwrap()
            .push(format!("replace_occurrence:{}:{text}", handle.start));
        Ok(())
    }
}

/// Lexicon answering from fixed lists, optionally failing one relation.
#[derive(Debug, Default)]
pub struct CannedLexicon {
    pub lists: HashMap<Relation, Vec<String>>,
    pub fail_on: Option<Relation>,
    pub calls: AtomicUsize,
    pub words: Mutex<Vec<String>>,
}

impl CannedLexicon {
    pub fn happy() -> Self {
        let list = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        Self {
            lists: HashMap::from([
                (Relation::Describing, list(&["very"])),
                (Relation::Synonyms, list(&["glad", "joyful"])),
                (Relation::Related, list(&["joyful", "cheerful"])),
                (Relation::Similar, list(&["happy", "hippy"])),
            ]),
            ..Default::default()
        }
    }

    pub fn failing(relation: Relation) -> Self {
        Self {
            fail_on: Some(relation),
            ..Self::happy()
        }
    }

    /// Number of completed four-way lookups.
    pub fn lookups(&self) -> usize {
        self.calls.load(Ordering::SeqCst) / 4
    }
}

#[async_trait::async_trait]
impl LexicalService for CannedLexicon {
    async fn related_words(
        &self,
        relation: Relation,
        word: &WordQuery,
        _max: u32,
    ) -> anyhow::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if relation == Relation::Synonyms {
            self.words.lock().unwrap().push(word.as_str().into());
        }
        if self.fail_on == Some(relation) {
            anyhow::bail!("lexicon returned 500");
        }
        Ok(self.lists.get(&relation).cloned().unwrap_or_default())
    }
}

/// Lexicon that blocks every call until the test releases it.
#[derive(Debug)]
pub struct GatedLexicon {
    pub started: Notify,
    pub gate: Semaphore,
    pub calls: AtomicUsize,
}

impl GatedLexicon {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn release_lookup(&self) {
        self.gate.add_permits(4);
    }
}

#[async_trait::async_trait]
impl LexicalService for GatedLexicon {
    async fn related_words(
        &self,
        _relation: Relation,
        _word: &WordQuery,
        _max: u32,
    ) -> anyhow::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate.acquire().await?.forget();
        Ok(vec!["word".into()])
    }
}

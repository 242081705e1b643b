use async_trait::async_trait;
use wordswap_core::types::{LookupResult, Relation, WordQuery};

/// A located occurrence in the host document.
///
/// The engine never interprets the fields; it only hands a handle back to the
/// host that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHandle {
    pub start: usize,
    pub len: usize,
}

/// The document editor the panel is attached to.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Text of the live selection; empty when the cursor is a caret.
    async fn selection_text(&self) -> anyhow::Result<String>;
    async fn first_paragraph_text(&self) -> anyhow::Result<String>;
    async fn replace_selection(&self, text: &str) -> anyhow::Result<()>;

    /// Whole-word occurrences in the document body, in document order.
    async fn find_whole_word(
        &self,
        word: &str,
        case_insensitive: bool,
    ) -> anyhow::Result<Vec<MatchHandle>>;

    async fn replace_occurrence(&self, handle: &MatchHandle, text: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LexicalService: Send + Sync {
    async fn related_words(
        &self,
        relation: Relation,
        word: &WordQuery,
        max: u32,
    ) -> anyhow::Result<Vec<String>>;
}

/// The visual surface. Calls are cheap and synchronous.
pub trait Presenter: Send + Sync {
    fn set_loading(&self, loading: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn clear_results(&self);
    fn render_results(&self, query: &WordQuery, result: &LookupResult);
    fn set_query_text(&self, text: &str);
    fn show_auto_fetch_status(&self, enabled: bool);

    // Stand-in for host actions when no document is attached.
    fn notice(&self, message: &str);
}

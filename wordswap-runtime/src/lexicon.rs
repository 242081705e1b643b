use wordswap_core::config::LookupConfig;
use wordswap_core::types::{Relation, WordQuery};
use wordswap_providers::datamuse::build_words_request;
use wordswap_providers::parse::parse_datamuse_words;
use wordswap_providers::runtime::HttpClient;

/// `LexicalService` backed by a Datamuse-compatible HTTP endpoint.
#[derive(Debug, Clone)]
pub struct DatamuseLexicon {
    base_url: String,
    client: HttpClient,
}

impl DatamuseLexicon {
    pub fn new(cfg: &LookupConfig) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: cfg.base_url.clone(),
            client: HttpClient::new(cfg.request_timeout())?,
        })
    }
}

#[async_trait::async_trait]
impl wordswap_engine::traits::LexicalService for DatamuseLexicon {
    async fn related_words(
        &self,
        relation: Relation,
        word: &WordQuery,
        max: u32,
    ) -> anyhow::Result<Vec<String>> {
        let req = build_words_request(&self.base_url, relation, word, max)?;
        let resp = self.client.execute(&req).await?;

        if !resp.is_success() {
            return Err(anyhow::anyhow!(
                "Datamuse request failed: status={} body={}",
                resp.status,
                String::from_utf8_lossy(&resp.body)
            ));
        }

        let words = parse_datamuse_words(&resp.body)?;
        log::trace!("{} {:?}: {} words", word, relation, words.len());
        Ok(words)
    }
}

use crate::request::HttpRequest;
use anyhow::Context;
use url::Url;
use wordswap_core::types::{Relation, WordQuery};

pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com";

/// `GET {base}/words?{relation}={word}&max={max}`
pub fn build_words_request(
    base_url: &str,
    relation: Relation,
    word: &WordQuery,
    max: u32,
) -> anyhow::Result<HttpRequest> {
    let mut url = Url::parse(&join_url(base_url, "/words"))
        .with_context(|| format!("invalid lexicon base url: {base_url}"))?;
    url.query_pairs_mut()
        .append_pair(relation.service_code(), word.as_str())
        .append_pair("max", &max.to_string());

    Ok(HttpRequest::get(url.as_str()).with_header("Accept", "application/json"))
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

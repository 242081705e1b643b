use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
    // `score`, `tags` and `numSyllables` are ignored.
}

/// Decodes a Datamuse `/words` response into the bare words, service order kept.
pub fn parse_datamuse_words(body: &[u8]) -> anyhow::Result<Vec<String>> {
    let entries: Vec<DatamuseWord> = serde_json::from_slice(body).context("decode Datamuse JSON")?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}

use crate::traits::LexicalService;
use anyhow::Context;
use futures_util::future::try_join_all;
use wordswap_core::config::RelationLimits;
use wordswap_core::types::{LookupResult, Relation, WordQuery};

/// Queries every relation at once and merges the answers.
///
/// All four requests are in flight together; the first failure fails the
/// whole lookup and no partial result is produced.
pub async fn fetch_word_data(
    service: &dyn LexicalService,
    limits: &RelationLimits,
    word: &WordQuery,
) -> anyhow::Result<LookupResult> {
    let lists = try_join_all(Relation::ALL.iter().map(|relation| async move {
        service
            .related_words(*relation, word, limits.max_for(*relation))
            .await
            .with_context(|| format!("lookup {:?} for '{}'", relation, word))
    }))
    .await?;

    let [describing, synonyms, related, similar]: [Vec<String>; 4] = lists
        .try_into()
        .map_err(|_| anyhow::anyhow!("lexicon returned an unexpected number of lists"))?;

    Ok(LookupResult::merge(
        word, describing, synonyms, related, similar,
    ))
}

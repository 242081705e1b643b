use crate::text::normalize_query;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query contains no letters")]
    Empty,
}

/// A normalized lookup key: lowercase ASCII letters, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordQuery(String);

impl WordQuery {
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let word = normalize_query(input);
        if word.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four word relations shown in the panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Describing,
    Synonyms,
    Related,
    Similar,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Describing,
        Relation::Synonyms,
        Relation::Related,
        Relation::Similar,
    ];

    /// Query parameter understood by the lexicon service.
    pub fn service_code(self) -> &'static str {
        match self {
            Relation::Describing => "rel_jjb",
            Relation::Synonyms => "rel_syn",
            Relation::Related => "ml",
            Relation::Similar => "sl",
        }
    }

    pub fn default_max(self) -> u32 {
        match self {
            Relation::Describing => 25,
            Relation::Synonyms => 20,
            Relation::Related => 15,
            Relation::Similar => 10,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Relation::Describing => "Describing words",
            Relation::Synonyms => "Synonyms",
            Relation::Related => "Related words",
            Relation::Similar => "Sounds like",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupResult {
    pub describing: Vec<String>,
    pub synonyms: Vec<String>,
    pub related: Vec<String>,
    pub similar: Vec<String>,
}

impl LookupResult {
    /// Builds a result from raw per-relation lists.
    ///
    /// `related` loses anything already listed as a synonym and `similar`
    /// loses the query word itself. Service order is kept.
    pub fn merge(
        query: &WordQuery,
        describing: Vec<String>,
        synonyms: Vec<String>,
        related: Vec<String>,
        similar: Vec<String>,
    ) -> Self {
        let known: HashSet<&str> = synonyms.iter().map(String::as_str).collect();
        let related = related
            .into_iter()
            .filter(|w| !known.contains(w.as_str()))
            .collect();
        let similar = similar
            .into_iter()
            .filter(|w| w != query.as_str())
            .collect();

        Self {
            describing,
            synonyms,
            related,
            similar,
        }
    }

    pub fn words(&self, relation: Relation) -> &[String] {
        match relation {
            Relation::Describing => &self.describing,
            Relation::Synonyms => &self.synonyms,
            Relation::Related => &self.related,
            Relation::Similar => &self.similar,
        }
    }

    pub fn is_empty(&self) -> bool {
        Relation::ALL.iter().all(|r| self.words(*r).is_empty())
    }

    /// Non-empty sections in display order.
    pub fn sections(&self) -> Vec<(Relation, &[String])> {
        Relation::ALL
            .iter()
            .map(|r| (*r, self.words(*r)))
            .filter(|(_, words)| !words.is_empty())
            .collect()
    }
}

use crate::types::Relation;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationLimits {
    pub describing: u32,
    pub synonyms: u32,
    pub related: u32,
    pub similar: u32,
}

impl RelationLimits {
    pub fn max_for(&self, relation: Relation) -> u32 {
        match relation {
            Relation::Describing => self.describing,
            Relation::Synonyms => self.synonyms,
            Relation::Related => self.related,
            Relation::Similar => self.similar,
        }
    }
}

impl Default for RelationLimits {
    fn default() -> Self {
        Self {
            describing: Relation::Describing.default_max(),
            synonyms: Relation::Synonyms.default_max(),
            related: Relation::Related.default_max(),
            similar: Relation::Similar.default_max(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    pub base_url: String,
    #[serde(default)]
    pub limits: RelationLimits,

    // Unset means no client timeout at all; a hung request stalls that search.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl LookupConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub poll_interval_ms: u64,
    pub auto_fetch_enabled: bool,
    pub min_word_len: usize,
}

impl DetectionConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 300,
            auto_fetch_enabled: true,
            min_word_len: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub lookup: LookupConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

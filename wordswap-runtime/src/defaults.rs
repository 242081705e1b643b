use wordswap_core::config::{AppConfig, DetectionConfig, LookupConfig, RelationLimits};
use wordswap_providers::datamuse::DEFAULT_BASE_URL;

pub fn default_lookup_config() -> LookupConfig {
    LookupConfig {
        base_url: DEFAULT_BASE_URL.into(),
        limits: RelationLimits::default(),
        request_timeout_ms: None,
    }
}

pub fn default_app_config() -> AppConfig {
    AppConfig {
        lookup: default_lookup_config(),
        detection: DetectionConfig::default(),
    }
}

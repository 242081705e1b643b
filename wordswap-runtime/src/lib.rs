pub mod config_store;
pub mod defaults;
pub mod lexicon;
pub mod runtime_engine;

pub mod datamuse;
pub mod parse;
pub mod request;
pub mod runtime;

pub mod detection;
pub mod engine;
pub mod lookup;
pub mod session;
pub mod traits;

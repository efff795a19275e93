pub mod engine;
pub mod net;
pub mod fetcher;

pub use engine::*;
pub use fetcher::Fetcher;

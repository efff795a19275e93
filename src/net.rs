mod fetch;
mod response;

pub use fetch::{fetch, FetchError};
pub use response::Response;

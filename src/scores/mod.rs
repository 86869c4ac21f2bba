pub use errors::SubmissionError;
pub use http::HttpScoreBackend;
pub use interface::ScoreBackend;
pub use memory::InMemoryScoreBackend;
pub use submitter::BackgroundScoreSubmitter;

pub mod consts;
pub mod errors;
pub mod handlers;
pub mod http;
pub mod interface;
pub mod memory;
pub mod models;
pub mod responses;
pub mod submitter;

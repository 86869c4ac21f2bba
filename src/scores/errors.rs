use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("score backend responded with status {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("invalid score backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Network(err.to_string())
    }
}

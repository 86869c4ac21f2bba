use crate::scores::errors::SubmissionError;
use crate::scores::interface::ScoreBackend;
use crate::scores::models::{Ack, LeaderboardEntry, ScoreSubmission};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Talks to the persistence backend over HTTP.
///
/// `base_url` should end with a slash so relative endpoints nest under it.
pub struct HttpScoreBackend {
    client: Client,
    score_url: Url,
    leaderboard_url: Url,
}

impl HttpScoreBackend {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            score_url: base_url.join("user/score")?,
            leaderboard_url: base_url.join("user/leaderboard")?,
        })
    }
}

#[async_trait]
impl ScoreBackend for HttpScoreBackend {
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<Ack, SubmissionError> {
        let response = self
            .client
            .put(self.score_url.clone())
            .json(&submission)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        // The acknowledgement body is informational only.
        Ok(response.json::<Ack>().await.unwrap_or_default())
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, SubmissionError> {
        let response = self
            .client
            .get(self.leaderboard_url.clone())
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json::<Vec<LeaderboardEntry>>().await?)
    }
}

async fn error_for_status(response: Response) -> Result<Response, SubmissionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(SubmissionError::Backend {
        status: status.as_u16(),
        message,
    })
}

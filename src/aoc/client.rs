use reqwest::{
    StatusCode,
    header::{ACCEPT, COOKIE},
};
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::{LeaderboardError, LeaderboardResponse},
};

/// Async client for the Advent of Code leaderboard API.
#[derive(Debug, Clone)]
pub struct AocClient {
    client: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl AocClient {
    pub fn new() -> LeaderboardResponse<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> LeaderboardResponse<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(LeaderboardError::Transport)?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authenticated GET decoding a JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        session: &str,
    ) -> LeaderboardResponse<T> {
        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(COOKIE, session_cookie(session))
            .send()
            .await
            .map_err(LeaderboardError::Transport)?;
        check_status(res.status())?;

        let body = res.bytes().await.map_err(LeaderboardError::Transport)?;
        serde_json::from_slice(&body).map_err(LeaderboardError::Decode)
    }
}

pub(crate) fn session_cookie(session: &str) -> String {
    format!("session={session}")
}

/// Map a response status onto the error taxonomy. Only 200 is a success.
pub(crate) fn check_status(status: StatusCode) -> LeaderboardResponse<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::INTERNAL_SERVER_ERROR => Err(LeaderboardError::AuthOrServer(status)),
        _ => Err(LeaderboardError::Status(status)),
    }
}

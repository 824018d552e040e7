//! Blocking counterpart of [`crate::AocClient`].
//!
//! Each call blocks the current thread until the response is decoded. Like
//! every `reqwest::blocking` client it must not be used from within an async
//! runtime.

use reqwest::header::{ACCEPT, COOKIE};
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::{LeaderboardError, LeaderboardResponse},
};

use super::{
    client::{check_status, session_cookie},
    endpoints::leaderboard::{leaderboard_url, ranked_members},
    ranking::SortMode,
    types::{Leaderboard, Member},
};

#[derive(Debug, Clone)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl AocClient {
    pub fn new() -> LeaderboardResponse<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> LeaderboardResponse<Self> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent());
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

    pub fn get_leaderboard(
        &self,
        leaderboard_id: u64,
        session: &str,
        year: u16,
    ) -> LeaderboardResponse<Leaderboard> {
        tracing::trace!(
            "[AOC::BLOCKING] get_leaderboard {} for {}",
            leaderboard_id,
            year
        );
        let url = leaderboard_url(self.config.base_url(), year, leaderboard_id);

        self.get(&url, session)
    }

    pub fn get_members(
        &self,
        leaderboard_id: u64,
        session: &str,
        year: u16,
        sort: SortMode,
    ) -> LeaderboardResponse<Vec<Member>> {
        let leaderboard = self.get_leaderboard(leaderboard_id, session, year)?;

        Ok(ranked_members(leaderboard, sort))
    }

    fn get<T: DeserializeOwned>(&self, url: &str, session: &str) -> LeaderboardResponse<T> {
        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(COOKIE, session_cookie(session))
            .send()
            .map_err(LeaderboardError::Transport)?;
        check_status(res.status())?;

        let body = res.bytes().map_err(LeaderboardError::Transport)?;
        serde_json::from_slice(&body).map_err(LeaderboardError::Decode)
    }
}

/// Fetch and rank with a default-configured blocking client.
pub fn get_members(
    leaderboard_id: u64,
    session: &str,
    year: u16,
    sort: SortMode,
) -> LeaderboardResponse<Vec<Member>> {
    AocClient::new()?.get_members(leaderboard_id, session, year, sort)
}

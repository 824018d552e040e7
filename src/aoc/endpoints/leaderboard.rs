use crate::aoc::{
    client::AocClient,
    ranking::{SortMode, rank_members},
    types::{Leaderboard, Member},
};
use crate::error::LeaderboardResponse;

impl AocClient {
    /// Fetch a private leaderboard as sent by the service.
    pub async fn get_leaderboard(
        &self,
        leaderboard_id: u64,
        session: &str,
        year: u16,
    ) -> LeaderboardResponse<Leaderboard> {
        tracing::trace!(
            "[AOC::CLIENT] get_leaderboard {} for {}",
            leaderboard_id,
            year
        );
        let url = leaderboard_url(self.config.base_url(), year, leaderboard_id);

        self.get(&url, session).await
    }

    /// Fetch a private leaderboard and return its members ranked by `sort`.
    ///
    /// A status 500 surfaces as [`crate::LeaderboardError::AuthOrServer`], since
    /// the service answers that way to an invalid session cookie.
    pub async fn get_members(
        &self,
        leaderboard_id: u64,
        session: &str,
        year: u16,
        sort: SortMode,
    ) -> LeaderboardResponse<Vec<Member>> {
        let leaderboard = self.get_leaderboard(leaderboard_id, session, year).await?;

        Ok(ranked_members(leaderboard, sort))
    }
}

pub(crate) fn leaderboard_url(base_url: &str, year: u16, leaderboard_id: u64) -> String {
    format!("{base_url}/{year}/leaderboard/private/view/{leaderboard_id}.json")
}

pub(crate) fn ranked_members(leaderboard: Leaderboard, sort: SortMode) -> Vec<Member> {
    tracing::debug!(
        "[AOC::CLIENT] leaderboard of {} for {}: {} members, ranking by {}",
        leaderboard.owner_id,
        leaderboard.event,
        leaderboard.members.len(),
        sort
    );

    let mut members = leaderboard.into_members();
    rank_members(&mut members, sort);
    members
}

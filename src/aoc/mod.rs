pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod ranking;
pub mod timestamp;
pub mod types;

use crate::error::LeaderboardResponse;
use client::AocClient;
use ranking::SortMode;
use types::Member;

/// Fetch and rank with a default-configured client.
///
/// Builds a new client on every call; keep an [`AocClient`] around when fetching
/// repeatedly.
pub async fn get_members(
    leaderboard_id: u64,
    session: &str,
    year: u16,
    sort: SortMode,
) -> LeaderboardResponse<Vec<Member>> {
    AocClient::new()?
        .get_members(leaderboard_id, session, year, sort)
        .await
}

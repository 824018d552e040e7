//! Advent of Code private leaderboard client.
//!
//! Fetches a private leaderboard with a session cookie, decodes it into typed
//! records and ranks the members by local score, global score or stars.
//!
//! ```no_run
//! use aoc_leaderboard::{AocClient, SortMode, count_total_stars};
//!
//! # async fn run() -> aoc_leaderboard::LeaderboardResponse<()> {
//! let client = AocClient::new()?;
//! let members = client
//!     .get_members(192_837, "53616c746564...", 2023, SortMode::ByLocalScore)
//!     .await?;
//!
//! for member in &members {
//!     println!("{:>4} {}", member.local_score, member.display_name());
//! }
//! println!("{} stars in total", count_total_stars(&members));
//! # Ok(())
//! # }
//! ```

pub mod aoc;
pub mod config;
pub mod error;

pub use aoc::{
    blocking,
    client::AocClient,
    get_members,
    ranking::{MemberComparator, SortMode, count_total_stars, rank_members},
    timestamp::StarTimestamp,
    types::{Leaderboard, Level, Member},
};
pub use config::ClientConfig;
pub use error::{LeaderboardError, LeaderboardResponse};

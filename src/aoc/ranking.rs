use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::LeaderboardError;

use super::types::Member;

/// Metric used to rank members, highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Keep the order the members came out of the leaderboard in.
    #[default]
    None,
    /// Local score, ties broken by stars.
    ByLocalScore,
    /// Global score, ties broken by local score.
    ByGlobalScore,
    /// Stars, ties broken by local score.
    ByStars,
}

impl SortMode {
    pub fn comparator(self) -> Option<MemberComparator> {
        match self {
            Self::None => None,
            Self::ByLocalScore => Some(MemberComparator::new(local_score, stars)),
            Self::ByGlobalScore => Some(MemberComparator::new(global_score, local_score)),
            Self::ByStars => Some(MemberComparator::new(stars, local_score)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ByLocalScore => "local",
            Self::ByGlobalScore => "global",
            Self::ByStars => "stars",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "local" | "local_score" => Ok(Self::ByLocalScore),
            "global" | "global_score" => Ok(Self::ByGlobalScore),
            "stars" => Ok(Self::ByStars),
            _ => Err(LeaderboardError::InvalidSortMode(s.to_string())),
        }
    }
}

type Key = fn(&Member) -> u64;

fn local_score(member: &Member) -> u64 {
    member.local_score
}

fn global_score(member: &Member) -> u64 {
    member.global_score
}

fn stars(member: &Member) -> u64 {
    u64::from(member.stars)
}

/// Ascending order on a primary key, then a tie-break key.
#[derive(Debug, Clone, Copy)]
pub struct MemberComparator {
    primary: Key,
    tie_break: Key,
}

impl MemberComparator {
    pub fn new(primary: Key, tie_break: Key) -> Self {
        Self { primary, tie_break }
    }

    pub fn compare(&self, a: &Member, b: &Member) -> Ordering {
        (self.primary)(a)
            .cmp(&(self.primary)(b))
            .then_with(|| (self.tie_break)(a).cmp(&(self.tie_break)(b)))
    }
}

/// Sort `members` in descending order of `sort`.
///
/// The sort is stable: members equal on both keys keep their relative order.
pub fn rank_members(members: &mut [Member], sort: SortMode) {
    if let Some(comparator) = sort.comparator() {
        members.sort_by(|a, b| comparator.compare(b, a));
    }
}

pub fn count_total_stars(members: &[Member]) -> u64 {
    members.iter().map(|m| u64::from(m.stars)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, stars: u32, local_score: u64, global_score: u64) -> Member {
        Member {
            id: id.to_string(),
            name: None,
            stars,
            local_score,
            global_score,
            last_star_ts: Default::default(),
            completion_day_level: Default::default(),
        }
    }

    // Every combination of small values, in an order unrelated to any ranking.
    fn grid() -> Vec<Member> {
        let mut members = Vec::new();
        for stars in [3, 0, 2, 1] {
            for local in [1, 4, 0, 2] {
                for global in [0, 2, 1] {
                    let id = format!("{stars}-{local}-{global}");
                    members.push(member(&id, stars, local, global));
                }
            }
        }
        members
    }

    fn ranked(sort: SortMode) -> Vec<Member> {
        let mut members = grid();
        rank_members(&mut members, sort);
        members
    }

    #[test]
    fn by_local_score_is_non_increasing() {
        let members = ranked(SortMode::ByLocalScore);

        for pair in members.windows(2) {
            assert!(pair[0].local_score >= pair[1].local_score);
            if pair[0].local_score == pair[1].local_score {
                assert!(pair[0].stars >= pair[1].stars);
            }
        }
    }

    #[test]
    fn by_global_score_is_non_increasing() {
        let members = ranked(SortMode::ByGlobalScore);

        for pair in members.windows(2) {
            assert!(pair[0].global_score >= pair[1].global_score);
            if pair[0].global_score == pair[1].global_score {
                assert!(pair[0].local_score >= pair[1].local_score);
            }
        }
    }

    #[test]
    fn by_stars_is_non_increasing() {
        let members = ranked(SortMode::ByStars);

        for pair in members.windows(2) {
            assert!(pair[0].stars >= pair[1].stars);
            if pair[0].stars == pair[1].stars {
                assert!(pair[0].local_score >= pair[1].local_score);
            }
        }
    }

    #[test]
    fn none_keeps_input_order() {
        let ids: Vec<_> = grid().into_iter().map(|m| m.id).collect();
        let ranked_ids: Vec<_> = ranked(SortMode::None).into_iter().map(|m| m.id).collect();

        assert_eq!(ids, ranked_ids);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let mut members = vec![member("first", 2, 5, 0), member("second", 2, 5, 0)];
        rank_members(&mut members, SortMode::ByStars);

        assert_eq!(members[0].id, "first");
        assert_eq!(members[1].id, "second");
    }

    #[test]
    fn tie_break_decides_equal_primary() {
        let mut members = vec![member("a", 2, 10, 0), member("b", 5, 10, 0)];
        rank_members(&mut members, SortMode::ByLocalScore);

        assert_eq!(members[0].id, "b");
    }

    #[test]
    fn comparator_orders_ascending() {
        let comparator = SortMode::ByGlobalScore.comparator().unwrap();
        let low = member("low", 0, 9, 1);
        let high = member("high", 0, 1, 2);

        assert_eq!(comparator.compare(&low, &high), Ordering::Less);
        assert_eq!(comparator.compare(&high, &low), Ordering::Greater);
        assert_eq!(comparator.compare(&low, &low), Ordering::Equal);
    }

    #[test]
    fn count_total_stars_sums() {
        assert_eq!(count_total_stars(&[]), 0);
        assert_eq!(
            count_total_stars(&[member("a", 3, 0, 0), member("b", 5, 0, 0)]),
            8
        );
    }

    #[test]
    fn sort_mode_parses_and_displays() {
        assert_eq!("stars".parse::<SortMode>().unwrap(), SortMode::ByStars);
        assert_eq!(" Local ".parse::<SortMode>().unwrap(), SortMode::ByLocalScore);
        assert_eq!("global_score".parse::<SortMode>().unwrap(), SortMode::ByGlobalScore);
        assert_eq!("none".parse::<SortMode>().unwrap(), SortMode::None);
        assert!(matches!(
            "fastest".parse::<SortMode>(),
            Err(LeaderboardError::InvalidSortMode(_))
        ));

        for mode in [
            SortMode::None,
            SortMode::ByLocalScore,
            SortMode::ByGlobalScore,
            SortMode::ByStars,
        ] {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_sort_mode_is_none() {
        assert_eq!(SortMode::default(), SortMode::None);
    }
}

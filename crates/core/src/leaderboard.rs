//! Leaderboard ranking and gap computation.
//!
//! The backend returns rows already ordered by score descending; input
//! order defines rank and nothing here re-sorts. Ranks are dense and
//! 1-based, so ties are broken by arrival order.

use serde::{Deserialize, Serialize};

use crate::campus::identifiers::EntrantIdentifier;

/// One row of a backend leaderboard response.
#[derive(Clone, Debug, Deserialize)]
pub struct RawLeaderboardEntry {
    #[serde(alias = "user_id", alias = "group_id")]
    pub id: String,
    pub nickname: String,
    pub score: i64,
    pub captures_count: u32,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub id: EntrantIdentifier,
    /// 1-based, dense, assigned by arrival position.
    pub rank: u32,
    pub display_name: String,
    pub item_count: u32,
    pub score: i64,
}

/// Minimum whole-point gain that would overtake the row ranked
/// immediately above; `None` for the rank-1 row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapAnnotation {
    pub row_id: EntrantIdentifier,
    pub points_to_next_rank: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedRow {
    pub row: LeaderboardRow,
    pub gap: GapAnnotation,
}

/// Assign ranks by arrival position over an already-ordered response.
pub fn rank_rows(entries: Vec<RawLeaderboardEntry>) -> Vec<LeaderboardRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            id: EntrantIdentifier::new(entry.id),
            rank: i as u32 + 1,
            display_name: entry.nickname,
            item_count: entry.captures_count,
            score: entry.score,
        })
        .collect()
}

/// Annotate each row with its gap to the row ranked immediately above.
///
/// Single left-to-right pass; each row only needs its predecessor. A tie
/// still requires at least one more point to surpass, so the gap is
/// never zero.
pub fn annotate(rows: &[LeaderboardRow]) -> Vec<AnnotatedRow> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let points_to_next_rank =
                (i > 0).then(|| (rows[i - 1].score - row.score).max(0) + 1);
            AnnotatedRow {
                row: row.clone(),
                gap: GapAnnotation { row_id: row.id.clone(), points_to_next_rank },
            }
        })
        .collect()
}

/// Arrange the top three rows podium-style: second, first, third.
/// Missing ranks are simply absent.
pub fn podium_order(rows: &[AnnotatedRow]) -> Vec<&AnnotatedRow> {
    [2u32, 1, 3]
        .iter()
        .filter_map(|rank| rows.iter().find(|r| r.row.rank == *rank))
        .collect()
}

/// The row to highlight as "YOU", if the viewer is on the board.
pub fn viewer_row<'a>(
    rows: &'a [AnnotatedRow],
    viewer: &EntrantIdentifier,
) -> Option<&'a AnnotatedRow> {
    rows.iter().find(|r| &r.row.id == viewer)
}

/// Aggregate personal and team score for the in-game HUD. Every field
/// defaults to zero, matching the backend's no-active-game response.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct ScoreSummary {
    #[serde(default)]
    pub personal_score: i64,
    #[serde(default)]
    pub personal_captures: u32,
    #[serde(default)]
    pub team_score: i64,
    #[serde(default)]
    pub team_captures: u32,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A drafted golfer. `score_to_par` is the effective score used for ranking,
/// i.e. already includes the missed-cut penalty. `cut_score` preserves the
/// pre-penalty score for display and is `Some` exactly when `missed_cut`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Golfer {
    pub id: i64,
    pub name: String,
    pub participant_id: i64,
    pub score_to_par: i32,
    pub missed_cut: bool,
    pub cut_score: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub total_score: i32,
    pub rank: Option<i64>,
}

/// Tournament-wide status. Replaced wholesale on every refresh.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInfo {
    pub status: String,
    pub round: String,
    pub cut_line: i32,
    pub players_made_cut: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantWithGolfers {
    #[serde(flatten)]
    pub participant: Participant,
    pub golfers: Vec<Golfer>,
}

/// One consistent read snapshot of the whole pool.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardData {
    pub participants: Vec<ParticipantWithGolfers>,
    pub tournament_info: TournamentInfo,
}

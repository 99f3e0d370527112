use async_trait::async_trait;
use golf_pool::error::PoolError;
use golf_pool::provider::{
    GolferLookup, ProviderSnapshot, RawGolferScore, ScoreProvider, TournamentStatus,
};
use golf_pool::seed::{PoolSeed, SeedGolfer, SeedParticipant};
use std::collections::HashMap;
use std::sync::Mutex;

/// Fake provider backed by a name→score table. Names absent from the table
/// resolve to the explicit not-found outcome, like the real adapter. The
/// table is behind a mutex so tests can change provider data between
/// refreshes.
pub struct FakeProvider {
    tournament: TournamentStatus,
    scores: Mutex<HashMap<String, RawGolferScore>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            tournament: TournamentStatus {
                status: "Round 4 in Progress".to_string(),
                round: "Round 4".to_string(),
                cut_line: 3,
                players_made_cut: 28,
            },
            scores: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_score(self, name: &str, score_to_par: i32, missed_cut: bool) -> Self {
        self.set_score(name, score_to_par, missed_cut);
        self
    }

    pub fn set_score(&self, name: &str, score_to_par: i32, missed_cut: bool) {
        self.scores.lock().unwrap().insert(
            name.to_string(),
            RawGolferScore {
                score_to_par,
                missed_cut,
            },
        );
    }

    pub fn remove_score(&self, name: &str) {
        self.scores.lock().unwrap().remove(name);
    }
}

#[async_trait]
impl ScoreProvider for FakeProvider {
    async fn fetch_leaderboard(
        &self,
        golfer_names: &[String],
    ) -> Result<ProviderSnapshot, PoolError> {
        let scores = self.scores.lock().unwrap();
        Ok(ProviderSnapshot {
            tournament: self.tournament.clone(),
            scores: golfer_names
                .iter()
                .map(|name| GolferLookup {
                    name: name.clone(),
                    score: scores.get(name).copied(),
                })
                .collect(),
        })
    }
}

/// Provider whose fetch always fails, for refresh-failure paths.
pub struct UnavailableProvider;

#[async_trait]
impl ScoreProvider for UnavailableProvider {
    async fn fetch_leaderboard(
        &self,
        _golfer_names: &[String],
    ) -> Result<ProviderSnapshot, PoolError> {
        Err(PoolError::ProviderUnavailable(
            "connection refused".to_string(),
        ))
    }
}

/// Roster seed with every golfer at even par and no cuts.
pub fn seed_pool(participants: &[(&str, &[&str])]) -> PoolSeed {
    PoolSeed {
        participants: participants
            .iter()
            .map(|(name, golfers)| SeedParticipant {
                name: (*name).to_string(),
                golfers: golfers
                    .iter()
                    .map(|g| SeedGolfer {
                        name: (*g).to_string(),
                        score_to_par: 0,
                        missed_cut: false,
                    })
                    .collect(),
            })
            .collect(),
    }
}

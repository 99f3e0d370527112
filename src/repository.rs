//! In-memory pool state and the refresh coordinator.
//!
//! One repository instance owns all state for the process. Reads take a
//! shared lock and return owned snapshots; the refresh pipeline is the only
//! writer and is additionally serialized against itself, so readers never
//! observe golfer scores that a rerank has not caught up with.

use crate::error::PoolError;
use crate::model::{
    Golfer, LeaderboardData, Participant, ParticipantWithGolfers, TournamentInfo,
};
use crate::names::normalize_name;
use crate::provider::{RawGolferScore, ScoreProvider};
use crate::ranking;
use crate::scoring::{self, format_score_to_par};
use crate::seed::PoolSeed;
use ahash::RandomState;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

struct PoolState {
    participants: BTreeMap<i64, Participant>,
    golfers: BTreeMap<i64, Golfer>,
    tournament: TournamentInfo,
    next_participant_id: i64,
    next_golfer_id: i64,
}

impl PoolState {
    fn leaderboard(&self) -> LeaderboardData {
        let mut participants: Vec<ParticipantWithGolfers> = self
            .participants
            .values()
            .map(|p| ParticipantWithGolfers {
                participant: p.clone(),
                golfers: self
                    .golfers
                    .values()
                    .filter(|g| g.participant_id == p.id)
                    .cloned()
                    .collect(),
            })
            .collect();
        participants.sort_by_key(|p| p.participant.rank.unwrap_or(i64::MAX));

        LeaderboardData {
            participants,
            tournament_info: self.tournament.clone(),
        }
    }
}

#[derive(Clone)]
pub struct PoolRepository {
    state: Arc<RwLock<PoolState>>,
    // Held for the entire fetch→reconcile→score→rank sequence so at most one
    // refresh is in flight.
    refresh_gate: Arc<Mutex<()>>,
    provider: Arc<dyn ScoreProvider>,
}

impl PoolRepository {
    /// Build the repository from a roster seed and an injected provider.
    /// Seed scores run through the scoring engine and the pool is ranked
    /// before the first read.
    #[must_use]
    pub fn new(provider: Arc<dyn ScoreProvider>, seed: &PoolSeed) -> Self {
        let mut participants = BTreeMap::new();
        let mut golfers = BTreeMap::new();
        let mut next_participant_id = 1;
        let mut next_golfer_id = 1;

        for seed_participant in &seed.participants {
            let participant_id = next_participant_id;
            next_participant_id += 1;
            participants.insert(
                participant_id,
                Participant {
                    id: participant_id,
                    name: seed_participant.name.clone(),
                    total_score: 0,
                    rank: None,
                },
            );

            for seed_golfer in &seed_participant.golfers {
                let effective =
                    scoring::effective_score(seed_golfer.score_to_par, seed_golfer.missed_cut);
                golfers.insert(
                    next_golfer_id,
                    Golfer {
                        id: next_golfer_id,
                        name: seed_golfer.name.clone(),
                        participant_id,
                        score_to_par: effective.score_to_par,
                        missed_cut: effective.missed_cut,
                        cut_score: effective.cut_score,
                    },
                );
                next_golfer_id += 1;
            }
        }

        ranking::recalculate(&mut participants, &golfers);

        Self {
            state: Arc::new(RwLock::new(PoolState {
                participants,
                golfers,
                tournament: initial_tournament_info(),
                next_participant_id,
                next_golfer_id,
            })),
            refresh_gate: Arc::new(Mutex::new(())),
            provider,
        }
    }

    /// One consistent snapshot of standings plus tournament status,
    /// participants ordered by rank.
    pub async fn leaderboard(&self) -> LeaderboardData {
        self.state.read().await.leaderboard()
    }

    /// Lookup by participant id; unknown ids are `None`, not an error.
    pub async fn participant(&self, id: i64) -> Option<ParticipantWithGolfers> {
        let state = self.state.read().await;
        let participant = state.participants.get(&id)?.clone();
        Some(ParticipantWithGolfers {
            golfers: state
                .golfers
                .values()
                .filter(|g| g.participant_id == id)
                .cloned()
                .collect(),
            participant,
        })
    }

    pub async fn golfers(&self) -> Vec<Golfer> {
        self.state.read().await.golfers.values().cloned().collect()
    }

    pub async fn tournament_info(&self) -> TournamentInfo {
        self.state.read().await.tournament.clone()
    }

    /// Add a participant with their fixed golfer draft and rerank. Golfers
    /// start at even par until the next refresh resolves them.
    pub async fn create_participant(&self, name: &str, golfer_names: &[String]) -> Participant {
        let mut state = self.state.write().await;
        let state = &mut *state;

        let participant_id = state.next_participant_id;
        state.next_participant_id += 1;
        state.participants.insert(
            participant_id,
            Participant {
                id: participant_id,
                name: name.to_string(),
                total_score: 0,
                rank: None,
            },
        );

        for golfer_name in golfer_names {
            let golfer_id = state.next_golfer_id;
            state.next_golfer_id += 1;
            state.golfers.insert(
                golfer_id,
                Golfer {
                    id: golfer_id,
                    name: golfer_name.clone(),
                    participant_id,
                    score_to_par: 0,
                    missed_cut: false,
                    cut_score: None,
                },
            );
        }

        ranking::recalculate(&mut state.participants, &state.golfers);
        log::info!("participant {name:?} joined with {} golfers", golfer_names.len());

        state.participants[&participant_id].clone()
    }

    /// Run the whole refresh pipeline as one logical operation: fetch the
    /// provider leaderboard for the full roster, reconcile names, apply the
    /// scoring rule per golfer, replace the tournament record, rerank.
    ///
    /// The provider fetch happens before any state lock is taken, so a failed
    /// fetch leaves the prior snapshot completely untouched. Roster golfers
    /// the provider does not know keep their previous score; that is a logged
    /// warning, never a refresh failure.
    ///
    /// # Errors
    /// Returns [`PoolError::ProviderUnavailable`] (or `Parse`) when the
    /// external fetch fails; no partial writes occur in that case.
    pub async fn refresh_scores(&self) -> Result<LeaderboardData, PoolError> {
        let _refresh = self.refresh_gate.lock().await;

        let roster: Vec<String> = {
            let state = self.state.read().await;
            state.golfers.values().map(|g| g.name.clone()).collect()
        };

        let snapshot = self.provider.fetch_leaderboard(&roster).await?;
        let fetched_at = Utc::now();

        let lookups: HashMap<String, Option<RawGolferScore>, RandomState> = snapshot
            .scores
            .iter()
            .map(|lookup| (normalize_name(&lookup.name), lookup.score))
            .collect();

        let mut state = self.state.write().await;
        let state = &mut *state;

        for golfer in state.golfers.values_mut() {
            match lookups.get(&normalize_name(&golfer.name)) {
                Some(Some(raw)) => {
                    let effective = scoring::effective_score(raw.score_to_par, raw.missed_cut);
                    golfer.score_to_par = effective.score_to_par;
                    golfer.missed_cut = effective.missed_cut;
                    golfer.cut_score = effective.cut_score;
                }
                Some(None) | None => {
                    log::warn!(
                        "golfer {:?} not found in provider leaderboard; keeping previous score {}",
                        golfer.name,
                        format_score_to_par(golfer.score_to_par)
                    );
                }
            }
        }

        state.tournament = TournamentInfo {
            status: snapshot.tournament.status,
            round: snapshot.tournament.round,
            cut_line: snapshot.tournament.cut_line,
            players_made_cut: snapshot.tournament.players_made_cut,
            last_updated: fetched_at,
        };

        ranking::recalculate(&mut state.participants, &state.golfers);

        let data = state.leaderboard();
        if let Some(leader) = data.participants.first() {
            log::info!(
                "scores refreshed; {} leads at {}",
                leader.participant.name,
                format_score_to_par(leader.participant.total_score)
            );
        }
        Ok(data)
    }
}

fn initial_tournament_info() -> TournamentInfo {
    TournamentInfo {
        status: "Round 3 in Progress".to_string(),
        round: "Round 3".to_string(),
        cut_line: 3,
        players_made_cut: 28,
        last_updated: Utc::now(),
    }
}

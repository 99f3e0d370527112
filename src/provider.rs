//! External score provider: the trait seam the refresh pipeline depends on,
//! plus the live RapidAPI leaderboard adapter.

use crate::error::PoolError;
use crate::names::names_match;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Normalized per-golfer record as reported by the provider. Pre-penalty:
/// applying the missed-cut rule is the scoring engine's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGolferScore {
    pub score_to_par: i32,
    pub missed_cut: bool,
}

/// Outcome of resolving one roster name against the provider's leaderboard.
/// `score == None` is the explicit "not found" result; a batch never silently
/// drops a name.
#[derive(Debug, Clone)]
pub struct GolferLookup {
    pub name: String,
    pub score: Option<RawGolferScore>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentStatus {
    pub status: String,
    pub round: String,
    pub cut_line: i32,
    pub players_made_cut: i32,
}

/// Everything one batched fetch yields: tournament status plus a lookup
/// result for every requested roster name.
#[derive(Debug, Clone)]
pub struct ProviderSnapshot {
    pub tournament: TournamentStatus,
    pub scores: Vec<GolferLookup>,
}

/// Seam for the external leaderboard source. The repository takes this as an
/// injected dependency so tests can substitute a fake without any network.
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    /// Fetch the current leaderboard and resolve the given roster names.
    ///
    /// Performs one network fetch per invocation. Any transport failure or
    /// non-success response fails the whole batch with
    /// [`PoolError::ProviderUnavailable`] — no partial results.
    ///
    /// # Errors
    /// Returns `ProviderUnavailable` if the fetch fails, `Parse` if the body
    /// is not valid JSON.
    async fn fetch_leaderboard(
        &self,
        golfer_names: &[String],
    ) -> Result<ProviderSnapshot, PoolError>;
}

/// Recognized configuration for the live adapter. Externalized so no
/// credential or tournament id lives in code.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_host: String,
    pub tournament_id: i64,
}

/// Live adapter for the RapidAPI golf leaderboard feed.
pub struct RapidApiProvider {
    client: Client,
    config: ProviderConfig,
}

impl RapidApiProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ScoreProvider for RapidApiProvider {
    async fn fetch_leaderboard(
        &self,
        golfer_names: &[String],
    ) -> Result<ProviderSnapshot, PoolError> {
        let url = format!(
            "https://{}/leaderboard/{}",
            self.config.api_host, self.config.tournament_id
        );

        let resp = self
            .client
            .get(&url)
            .header("x-rapidapi-host", &self.config.api_host)
            .header("x-rapidapi-key", &self.config.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PoolError::ProviderUnavailable(format!(
                "leaderboard request for tournament {} returned {}",
                self.config.tournament_id,
                resp.status()
            )));
        }

        let body: Value = resp.json().await?;
        Ok(parse_leaderboard_body(&body, golfer_names))
    }
}

/// Translate a provider response body into a normalized snapshot. The feed
/// nests `tournament` and `leaderboard` under `results`, but older payloads
/// put them at the top level; accept both.
#[must_use]
pub fn parse_leaderboard_body(body: &Value, golfer_names: &[String]) -> ProviderSnapshot {
    let tournament = body
        .pointer("/results/tournament")
        .or_else(|| body.get("tournament"))
        .unwrap_or(&Value::Null);
    let empty = vec![];
    let leaderboard = body
        .pointer("/results/leaderboard")
        .or_else(|| body.get("leaderboard"))
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let players_made_cut = leaderboard
        .iter()
        .filter(|entry| !entry_missed_cut(entry))
        .count();

    let status = tournament
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("In Progress")
        .to_string();
    let round = format!(
        "Round {}",
        tournament
            .get("current_round")
            .and_then(Value::as_i64)
            .unwrap_or(1)
    );
    let cut_line = tournament
        .get("cut_line")
        .and_then(parse_to_par)
        .unwrap_or(0);

    let scores = golfer_names
        .iter()
        .map(|name| {
            let entry = leaderboard.iter().find(|entry| {
                let full_name = format!(
                    "{} {}",
                    entry.get("first_name").and_then(Value::as_str).unwrap_or(""),
                    entry.get("last_name").and_then(Value::as_str).unwrap_or("")
                );
                names_match(name, &full_name)
            });

            let score = entry.map(|entry| RawGolferScore {
                score_to_par: entry
                    .get("total_to_par")
                    .and_then(parse_to_par)
                    .unwrap_or(0),
                missed_cut: entry_missed_cut(entry),
            });

            GolferLookup {
                name: name.clone(),
                score,
            }
        })
        .collect();

    ProviderSnapshot {
        tournament: TournamentStatus {
            status,
            round,
            cut_line,
            players_made_cut: players_made_cut as i32,
        },
        scores,
    }
}

fn entry_missed_cut(entry: &Value) -> bool {
    matches!(
        entry.get("status").and_then(Value::as_str),
        Some("cut" | "wd" | "dq")
    )
}

/// Score-to-par fields arrive as numbers or as display strings ("E", "+3").
fn parse_to_par(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    let s = value.as_str()?.trim();
    if s.eq_ignore_ascii_case("e") {
        return Some(0);
    }
    s.trim_start_matches('+').parse().ok()
}

use clap::Parser;
use std::path::PathBuf;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API key for the leaderboard data provider.
    #[arg(short = 'k', long, value_name = "API_KEY")]
    pub api_key: String,

    /// Provider host; also sent as the request's host header.
    #[arg(
        long,
        value_name = "API_HOST",
        default_value = "golf-leaderboard-data.p.rapidapi.com"
    )]
    pub api_host: String,

    /// Provider id of the tournament being pooled.
    #[arg(short = 't', long, value_name = "TOURNAMENT_ID", default_value = "759")]
    pub tournament_id: i64,

    /// Address to serve the JSON API on.
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,

    /// Roster JSON to seed the pool from. Falls back to the built-in sample
    /// pool when omitted.
    #[arg(long, value_name = "ROSTER_JSON")]
    pub roster_json: Option<PathBuf>,
}

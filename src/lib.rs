pub mod args;
pub mod controller {
    pub mod leaderboard;
}
pub mod error;
pub mod model;
pub mod names;
pub mod provider;
pub mod ranking;
pub mod repository;
pub mod scoring;
pub mod seed;

pub use error::PoolError;
pub use repository::PoolRepository;

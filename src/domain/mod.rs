pub mod models;

pub use models::{League, Matchup, Team, TeamId};

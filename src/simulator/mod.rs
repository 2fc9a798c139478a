pub mod engine;
pub mod luck;
pub mod types;

pub use engine::compute_rankings;
pub use types::{ExpectedRecord, RankingRow, Record};

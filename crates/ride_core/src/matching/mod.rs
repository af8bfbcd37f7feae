pub mod scorer;
pub mod types;

pub use scorer::{rank_rides, score_ride};
pub use types::{MatchWeights, ScoredRide};

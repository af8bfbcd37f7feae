use crate::rides::Ride;

/// Default bonus for sharing a university with the driver.
pub const UNIVERSITY_BONUS: u32 = 30;

/// Default bonus for sharing a music preference.
pub const MUSIC_BONUS: u32 = 15;

/// Default bonus for sharing a conversation level.
pub const CONVERSATION_BONUS: u32 = 10;

/// Default bonus for departing near the rider's preferred hour.
pub const DEPARTURE_BONUS: u32 = 10;

/// Default bonus for a same-gender driver when the rider asked for one.
pub const GENDER_BONUS: u32 = 15;

/// Default departure-hour window, in hours each side of the preference.
pub const DEPARTURE_WINDOW_HOURS: u8 = 2;

/// Default score a ride must exceed to appear in ranked results.
pub const MIN_SCORE: u32 = 20;

/// Bonus table and threshold for the compatibility scorer.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub university_bonus: u32,
    pub music_bonus: u32,
    pub conversation_bonus: u32,
    pub departure_bonus: u32,
    pub gender_bonus: u32,
    /// Hour-of-day tolerance for the departure bonus. No wraparound across
    /// midnight: hour 23 and hour 1 are 22 apart.
    pub departure_window_hours: u8,
    /// Rides scoring at or below this are dropped from ranked results.
    pub min_score: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            university_bonus: UNIVERSITY_BONUS,
            music_bonus: MUSIC_BONUS,
            conversation_bonus: CONVERSATION_BONUS,
            departure_bonus: DEPARTURE_BONUS,
            gender_bonus: GENDER_BONUS,
            departure_window_hours: DEPARTURE_WINDOW_HOURS,
            min_score: MIN_SCORE,
        }
    }
}

impl MatchWeights {
    /// Sum of all bonuses: the highest score any ride can reach.
    pub fn max_score(&self) -> u32 {
        self.university_bonus
            + self.music_bonus
            + self.conversation_bonus
            + self.departure_bonus
            + self.gender_bonus
    }

    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_departure_window_hours(mut self, hours: u8) -> Self {
        self.departure_window_hours = hours;
        self
    }
}

/// A candidate ride together with its compatibility score. Produced fresh
/// per ranking call, never persisted.
#[derive(Debug, Clone)]
pub struct ScoredRide {
    pub ride: Ride,
    pub compatibility_score: u32,
}

/// Quiz score banding

/// Where a final score lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    OnTrack,
    KeepPracticing,
}

/// Lowest score that still counts as on track
pub const ON_TRACK_THRESHOLD: usize = 3;

impl ScoreBand {
    /// Band for `score` out of `total`
    pub fn classify(score: usize, total: usize) -> Self {
        if total > 0 && score >= total {
            ScoreBand::Perfect
        } else if score >= ON_TRACK_THRESHOLD {
            ScoreBand::OnTrack
        } else {
            ScoreBand::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Perfect => "💪 Great job! You're a cybersecurity pro!",
            ScoreBand::OnTrack => "👍 Nice! You’re on the right track. Keep learning to stay safe.",
            ScoreBand::KeepPracticing => "🔒 Keep practicing — knowledge is your best defense!",
        }
    }
}

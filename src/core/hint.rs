/// Qualitative proximity band for a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// Within 5 of the secret.
    Hot,
    /// Within 10.
    Warm,
    /// Within 20.
    Cool,
    /// Further than 20.
    Cold,
}

impl HintTier {
    /// Classify an absolute distance. Bounds are inclusive and the nearest
    /// matching tier wins.
    pub fn from_distance(distance: u64) -> Self {
        match distance {
            0..=5 => HintTier::Hot,
            6..=10 => HintTier::Warm,
            11..=20 => HintTier::Cool,
            _ => HintTier::Cold,
        }
    }

    /// Tier for a guess against a secret.
    pub fn between(secret: i64, guess: i64) -> Self {
        Self::from_distance(secret.abs_diff(guess))
    }
}

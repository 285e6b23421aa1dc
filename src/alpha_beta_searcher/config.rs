//! Search configuration and the per-searcher context that owns the random source.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

pub const DEFAULT_SEARCH_DEPTH: u8 = 6;
pub const DEFAULT_QUIESCENCE_DEPTH: u8 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("time limit must be a non-negative number of seconds that fits a Duration (got {0})")]
    InvalidTimeLimit(f64),
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Nominal depth of the main alpha-beta search, in plies.
    pub depth: u8,
    /// Depth budget of the capture-only extension run at the horizon.
    pub quiescence_depth: u8,
    /// Wall-clock budget for one root search. `None` searches to full depth.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            quiescence_depth: DEFAULT_QUIESCENCE_DEPTH,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8, quiescence_depth: u8) -> Self {
        Self {
            depth,
            quiescence_depth,
            time_limit: None,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the time limit from a number of seconds. Zero disables the limit.
    pub fn with_time_limit_secs(self, seconds: f64) -> Result<Self, ConfigError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::InvalidTimeLimit(seconds));
        }

        let time_limit = if seconds == 0.0 {
            None
        } else {
            let limit = Duration::try_from_secs_f64(seconds)
                .map_err(|_| ConfigError::InvalidTimeLimit(seconds))?;
            Some(limit)
        };
        Ok(self.with_time_limit(time_limit))
    }

    /// A limit too large to represent as an `Instant` never expires.
    pub(crate) fn deadline_from(&self, start: Instant) -> Option<Instant> {
        self.time_limit.and_then(|limit| start.checked_add(limit))
    }
}

/// Long-lived searcher state: the configuration and an optional random source
/// used to shuffle moves before ordering. Without a random source, moves are
/// searched in generation order and the search is fully deterministic.
pub struct SearchContext {
    config: SearchConfig,
    rng: Option<StdRng>,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, rng: None }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    /// Shuffles moves with a seeded generator, so games vary but remain reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn quiescence_depth(&self) -> u8 {
        self.config.quiescence_depth
    }

    pub(crate) fn shuffle<M>(&mut self, moves: &mut [M]) {
        if let Some(rng) = self.rng.as_mut() {
            moves.shuffle(rng);
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

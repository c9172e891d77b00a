//! Iteration pacing.

use std::time::{Duration, TryFromFloatSecsError};

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reviewload_config::RunnerConfig;
use reviewload_core::schedule::IterationSchedule;
use tokio::time::{sleep, Instant};

/// Wait between two iterations, drawn uniformly in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    min_ms: u64,
    max_ms: u64,
}

impl WaitTime {
    pub fn between(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::between(config.wait_min, config.wait_max)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.min_ms == self.max_ms {
            Duration::from_millis(self.min_ms)
        } else {
            Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
        }
    }
}

/// Delay between two virtual user starts.
pub fn spawn_interval(spawn_rate: f64) -> Result<Duration, TryFromFloatSecsError> {
    Duration::try_from_secs_f64(1.0 / spawn_rate)
}

/// Runs iterations until a deadline, waiting between each of them.
///
/// The first iteration starts right away; no iteration starts past the
/// deadline.
pub struct PacedSchedule {
    deadline: Instant,
    wait_time: WaitTime,
    rng: ChaCha8Rng,
    started: bool,
}

impl PacedSchedule {
    pub fn new(deadline: Instant, wait_time: WaitTime, seed: u64) -> Self {
        Self {
            deadline,
            wait_time,
            rng: ChaCha8Rng::seed_from_u64(seed),
            started: false,
        }
    }
}

#[async_trait]
impl IterationSchedule for PacedSchedule {
    async fn next_iteration(&mut self) -> bool {
        if self.started {
            let wait = self.wait_time.sample(&mut self.rng);
            if Instant::now() + wait >= self.deadline {
                return false;
            }

            sleep(wait).await;
        }

        self.started = true;
        Instant::now() < self.deadline
    }
}

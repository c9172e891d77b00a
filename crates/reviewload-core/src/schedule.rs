//! Iteration scheduling seam.
//!
//! Pacing and stop conditions belong to the harness; the scenario only asks
//! whether it may run one more iteration.

use async_trait::async_trait;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait IterationSchedule: Send {
    /// Wait until the next iteration is due, `false` once the user must stop.
    async fn next_iteration(&mut self) -> bool;
}

/// Grants a fixed number of iterations, without waiting.
pub struct IterationLimit {
    remaining: u64,
}

impl IterationLimit {
    pub fn new(iterations: u64) -> Self {
        Self {
            remaining: iterations,
        }
    }
}

#[async_trait]
impl IterationSchedule for IterationLimit {
    async fn next_iteration(&mut self) -> bool {
        if self.remaining == 0 {
            false
        } else {
            self.remaining -= 1;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn iteration_limit() {
        let mut schedule = IterationLimit::new(2);

        assert!(schedule.next_iteration().await);
        assert!(schedule.next_iteration().await);
        assert!(!schedule.next_iteration().await);
        assert!(!schedule.next_iteration().await);
    }
}

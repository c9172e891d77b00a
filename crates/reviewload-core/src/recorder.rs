//! Outcome recording.

use std::sync::Mutex;

use reviewload_models::RecordedOutcome;

/// Sink for request outcomes, owned by the harness.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait OutcomeRecorder: Send + Sync {
    fn record(&self, outcome: RecordedOutcome);
}

/// Keeps every outcome in memory, in recording order.
#[derive(Default)]
pub struct MemoryRecorder {
    outcomes: Mutex<Vec<RecordedOutcome>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.outcomes
            .lock()
            .map(|outcomes| outcomes.clone())
            .unwrap_or_default()
    }
}

impl OutcomeRecorder for MemoryRecorder {
    fn record(&self, outcome: RecordedOutcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push(outcome);
        }
    }
}

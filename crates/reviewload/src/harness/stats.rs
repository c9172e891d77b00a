//! Outcome aggregation.

use std::{collections::BTreeMap, fmt::Display, sync::Mutex, time::Duration};

use reviewload_core::recorder::OutcomeRecorder;
use reviewload_models::{Endpoint, Outcome, RecordedOutcome};

/// Counters for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndpointStats {
    pub successes: u64,
    pub failures: u64,
    pub total_elapsed: Duration,
}

impl EndpointStats {
    pub fn requests(&self) -> u64 {
        self.successes + self.failures
    }

    pub fn mean_elapsed(&self) -> Duration {
        match u32::try_from(self.requests()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(count) => self.total_elapsed / count,
        }
    }

    fn add(&mut self, other: &EndpointStats) {
        self.successes += other.successes;
        self.failures += other.failures;
        self.total_elapsed += other.total_elapsed;
    }
}

/// Snapshot of the recorded outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub endpoints: BTreeMap<Endpoint, EndpointStats>,
    pub failures: BTreeMap<(Endpoint, String), u64>,
}

impl RunSummary {
    pub fn total(&self) -> EndpointStats {
        let mut total = EndpointStats::default();
        for stats in self.endpoints.values() {
            total.add(stats);
        }

        total
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>10}",
            "Name", "# reqs", "# fails", "Avg (ms)"
        )?;

        let rows = self
            .endpoints
            .iter()
            .map(|(endpoint, stats)| (endpoint.to_str(), *stats))
            .chain(std::iter::once(("Aggregated", self.total())));
        for (name, stats) in rows {
            writeln!(
                f,
                "{:<12} {:>10} {:>10} {:>10}",
                name,
                stats.requests(),
                stats.failures,
                stats.mean_elapsed().as_millis()
            )?;
        }

        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures:")?;
            for ((endpoint, message), count) in &self.failures {
                writeln!(f, "  {count:>6}x {endpoint}: {message}")?;
            }
        }

        Ok(())
    }
}

/// Thread-safe recorder shared by every virtual user.
#[derive(Default)]
pub struct StatsRecorder {
    summary: Mutex<RunSummary>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
            .lock()
            .map(|summary| summary.clone())
            .unwrap_or_default()
    }
}

impl OutcomeRecorder for StatsRecorder {
    fn record(&self, recorded: RecordedOutcome) {
        let Ok(mut summary) = self.summary.lock() else {
            return;
        };

        let stats = summary.endpoints.entry(recorded.endpoint).or_default();
        stats.total_elapsed += recorded.elapsed;
        match recorded.outcome {
            Outcome::Success => stats.successes += 1,
            Outcome::Failure { message } => {
                stats.failures += 1;
                *summary
                    .failures
                    .entry((recorded.endpoint, message))
                    .or_default() += 1;
            }
        }
    }
}

/// Explicit state for the trigger/export lifecycle.
///
/// Transitions: Idle → Loading → (Ready on success | Idle on failure).
/// A second trigger while loading is rejected, and a failed fetch
/// leaves no partial or stale results behind.
use anyhow::{bail, Result};

use crate::analyzer::FrequencyEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct Session {
    phase: Phase,
    results: Vec<FrequencyEntry>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            phase: Phase::Idle,
            results: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a fetch-and-analyze pass. Rejected while one is in flight.
    pub fn begin(&mut self) -> Result<()> {
        if self.phase == Phase::Loading {
            bail!("An analysis is already in progress");
        }
        self.phase = Phase::Loading;
        Ok(())
    }

    /// Record a completed analysis.
    pub fn complete(&mut self, results: Vec<FrequencyEntry>) {
        self.results = results;
        self.phase = Phase::Ready;
    }

    /// Return to idle after a failed fetch, discarding any earlier results.
    pub fn fail(&mut self) {
        self.results.clear();
        self.phase = Phase::Idle;
    }

    /// The ranked list, available only once an analysis has completed
    /// with at least one entry.
    pub fn ranked(&self) -> Option<&[FrequencyEntry]> {
        match self.phase {
            Phase::Ready if !self.results.is_empty() => Some(&self.results),
            _ => None,
        }
    }

    /// Whether an export can run.
    pub fn can_export(&self) -> bool {
        self.ranked().is_some()
    }
}

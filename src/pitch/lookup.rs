//! E-mail discovery seam.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PitchCandidate;
use crate::config::EmailLookupConfig;

/// Completion of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
}

/// Something that can find a contact address for a candidate.
pub trait EmailLookup {
    fn lookup(&mut self, candidate: &PitchCandidate) -> LookupOutcome;

    /// Resolve several candidates at once. Outcomes are in input order.
    fn lookup_batch(&mut self, candidates: &[PitchCandidate]) -> Vec<LookupOutcome> {
        candidates.iter().map(|c| self.lookup(c)).collect()
    }
}

/// Stand-in for a real discovery service: waits, then finds an address
/// with a fixed probability.
pub struct SimulatedLookup {
    delay: Duration,
    hit_rate: f64,
    rng: StdRng,
}

impl SimulatedLookup {
    pub fn new(config: &EmailLookupConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic variant for reproducible runs.
    pub fn seeded(config: &EmailLookupConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &EmailLookupConfig, rng: StdRng) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            hit_rate: usable_rate(config.hit_rate),
            rng,
        }
    }

    fn roll(&mut self, candidate: &PitchCandidate) -> LookupOutcome {
        if self.rng.random_bool(self.hit_rate) {
            LookupOutcome::Found(guess_email(&candidate.name))
        } else {
            LookupOutcome::NotFound
        }
    }
}

impl EmailLookup for SimulatedLookup {
    fn lookup(&mut self, candidate: &PitchCandidate) -> LookupOutcome {
        thread::sleep(self.delay);
        self.roll(candidate)
    }

    /// One delay for the whole batch.
    fn lookup_batch(&mut self, candidates: &[PitchCandidate]) -> Vec<LookupOutcome> {
        if candidates.is_empty() {
            return Vec::new();
        }
        thread::sleep(self.delay);
        candidates.iter().map(|c| self.roll(c)).collect()
    }
}

/// Probability `random_bool` accepts. NaN and infinities count as never.
fn usable_rate(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// The address the simulated service "finds" for a channel name.
pub fn guess_email(name: &str) -> String {
    let local = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    format!("contact.{}@gmail.com", local)
}

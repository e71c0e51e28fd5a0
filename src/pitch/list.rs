use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::{EmailLookup, EmailStatus, EmailUpdate, LookupOutcome, PitchCandidate};
use crate::results::ResultRow;
use crate::storage::{StorageError, StorageManager};

/// State key of the persisted candidate list.
pub const PITCH_STORAGE_KEY: &str = "pitch-storage";

/// Counts from one [`PitchList::resolve_pending`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSummary {
    pub attempted: usize,
    pub found: usize,
    pub not_found: usize,
}

/// The persisted outreach list.
#[derive(Debug, Clone)]
pub struct PitchList {
    storage: StorageManager,
    candidates: Vec<PitchCandidate>,
}

impl PitchList {
    /// Load the persisted list. Unreadable state yields an empty list.
    pub fn load(storage: &StorageManager) -> Self {
        let candidates = match storage.read::<Vec<PitchCandidate>>(PITCH_STORAGE_KEY) {
            Ok(Some(saved)) => dedup(saved),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "ignoring saved pitch list");
                Vec::new()
            }
        };

        Self {
            storage: storage.clone(),
            candidates,
        }
    }

    pub fn candidates(&self) -> &[PitchCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, influencer_id: &str) -> bool {
        self.get(influencer_id).is_some()
    }

    pub fn get(&self, influencer_id: &str) -> Option<&PitchCandidate> {
        self.candidates
            .iter()
            .find(|c| c.influencer_id == influencer_id)
    }

    /// Append candidates whose id is not yet listed. New entries start idle.
    ///
    /// Returns how many were actually added.
    pub fn add_candidates<I>(&mut self, incoming: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = PitchCandidate>,
    {
        let mut seen: HashSet<String> = self
            .candidates
            .iter()
            .map(|c| c.influencer_id.clone())
            .collect();

        let mut added = 0;
        for mut candidate in incoming {
            if !seen.insert(candidate.influencer_id.clone()) {
                debug!(id = %candidate.influencer_id, "already on pitch list");
                continue;
            }
            candidate.email = None;
            candidate.email_status = EmailStatus::Idle;
            self.candidates.push(candidate);
            added += 1;
        }

        if added > 0 {
            self.persist()?;
            info!(added, total = self.candidates.len(), "added pitch candidates");
        }
        Ok(added)
    }

    /// Promote result rows to candidates.
    pub fn add_rows<'a, I>(&mut self, rows: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = &'a ResultRow>,
    {
        self.add_candidates(rows.into_iter().map(PitchCandidate::from))
    }

    /// Drop one candidate. Returns whether it was listed.
    pub fn remove(&mut self, influencer_id: &str) -> Result<bool, StorageError> {
        let before = self.candidates.len();
        self.candidates.retain(|c| c.influencer_id != influencer_id);
        if self.candidates.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Merge an e-mail update into one candidate. Unknown ids are ignored.
    pub fn update(&mut self, influencer_id: &str, update: EmailUpdate) -> Result<bool, StorageError> {
        let Some(candidate) = self
            .candidates
            .iter_mut()
            .find(|c| c.influencer_id == influencer_id)
        else {
            debug!(id = influencer_id, "update for unlisted candidate ignored");
            return Ok(false);
        };

        candidate.email_status = update.status;
        if update.email.is_some() {
            candidate.email = update.email;
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the list. Returns how many candidates were dropped.
    pub fn clear(&mut self) -> Result<usize, StorageError> {
        let dropped = self.candidates.len();
        self.candidates.clear();
        self.persist()?;
        Ok(dropped)
    }

    /// Ids still waiting for an e-mail lookup.
    pub fn pending_ids(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|c| c.email_status.is_pending())
            .map(|c| c.influencer_id.clone())
            .collect()
    }

    /// Run the lookup for every pending candidate.
    ///
    /// Pending entries are marked loading and persisted before the lookup
    /// runs, so an interrupted run leaves them visibly in flight. A later
    /// run picks loading entries up again.
    pub fn resolve_pending(
        &mut self,
        lookup: &mut dyn EmailLookup,
    ) -> Result<LookupSummary, StorageError> {
        let pending = self.pending_ids();
        if pending.is_empty() {
            return Ok(LookupSummary::default());
        }

        for candidate in self.candidates.iter_mut() {
            if candidate.email_status.is_pending() {
                candidate.email_status = EmailStatus::Loading;
                candidate.email = None;
            }
        }
        self.persist()?;

        let batch: Vec<PitchCandidate> = self
            .candidates
            .iter()
            .filter(|c| c.email_status == EmailStatus::Loading)
            .cloned()
            .collect();
        let outcomes = lookup.lookup_batch(&batch);
        if outcomes.len() != batch.len() {
            warn!(
                expected = batch.len(),
                received = outcomes.len(),
                "email lookup returned a partial batch, the rest stays pending"
            );
        }

        let mut summary = LookupSummary::default();
        for (candidate, outcome) in batch.iter().zip(outcomes) {
            summary.attempted += 1;
            match outcome {
                LookupOutcome::Found(_) => summary.found += 1,
                LookupOutcome::NotFound => summary.not_found += 1,
            }
            // Candidates removed meanwhile simply don't match.
            if let Some(entry) = self
                .candidates
                .iter_mut()
                .find(|c| c.influencer_id == candidate.influencer_id)
            {
                let update = EmailUpdate::from(outcome);
                entry.email_status = update.status;
                entry.email = update.email;
            }
        }
        self.persist()?;

        info!(
            attempted = summary.attempted,
            found = summary.found,
            "email lookup finished"
        );
        Ok(summary)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.write(PITCH_STORAGE_KEY, &self.candidates)
    }
}

/// Keep the first entry for every id.
fn dedup(saved: Vec<PitchCandidate>) -> Vec<PitchCandidate> {
    let mut seen = HashSet::new();
    saved
        .into_iter()
        .filter(|c| seen.insert(c.influencer_id.clone()))
        .collect()
}

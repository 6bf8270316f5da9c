use rand::Rng;

use crate::exclusion::ExclusionSet;
use crate::model::WordEntry;
use crate::progress::ProgressTracker;

/// A pool entry that survived filtering, with its draw weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedCandidate<'p> {
    pub entry: &'p WordEntry,
    pub weight: u32,
}

/// Picks the next card from the active pool.
///
/// Excluded words and words whose current streak has reached the learned
/// threshold are skipped. The rest are drawn with probability proportional to
/// `max(1, base_weight - streak)`, so fresh words come up more often than
/// nearly-learned ones.
#[derive(Debug, Clone, Copy)]
pub struct CardSelector<'a> {
    tracker: &'a ProgressTracker,
    exclusions: &'a ExclusionSet,
}

impl<'a> CardSelector<'a> {
    #[must_use]
    pub fn new(tracker: &'a ProgressTracker, exclusions: &'a ExclusionSet) -> Self {
        Self {
            tracker,
            exclusions,
        }
    }

    /// Draw weight of a single entry, or `None` if it is not eligible.
    #[must_use]
    pub fn weight_of(&self, entry: &WordEntry) -> Option<u32> {
        let key = entry.greek.as_str();
        if self.exclusions.contains(key) {
            return None;
        }
        let streak = self.tracker.streak_of(key);
        let settings = self.tracker.settings();
        if settings.is_learned_streak(streak) {
            return None;
        }
        Some(settings.weight_for(streak))
    }

    /// Eligible entries in pool order.
    pub fn candidates<'p, I>(&self, pool: I) -> Vec<WeightedCandidate<'p>>
    where
        I: IntoIterator<Item = &'p WordEntry>,
    {
        pool.into_iter()
            .filter_map(|entry| {
                self.weight_of(entry)
                    .map(|weight| WeightedCandidate { entry, weight })
            })
            .collect()
    }

    /// Draws one card. `None` means every word is learned or excluded.
    ///
    /// Uses a cumulative-weight table and a binary search over it, so the cost
    /// is linear in the pool size regardless of the weights.
    pub fn next_card<'p, I, R>(&self, pool: I, rng: &mut R) -> Option<&'p WordEntry>
    where
        I: IntoIterator<Item = &'p WordEntry>,
        R: Rng + ?Sized,
    {
        let candidates = self.candidates(pool);
        let mut running = 0_u64;
        let cumulative: Vec<u64> = candidates
            .iter()
            .map(|c| {
                running += u64::from(c.weight);
                running
            })
            .collect();

        let total = *cumulative.last()?;
        let ticket = rng.random_range(0..total);
        let index = cumulative.partition_point(|&bound| bound <= ticket);
        candidates.get(index).map(|c| c.entry)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

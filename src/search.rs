use crate::classify::VoteRule;
use crate::dataset::{Dataset, DimensionMask, DIMENSIONS};
use crate::evaluate::{leave_one_out, EvaluationResult};

/// Sink for search progress; the core never prints. `trial` fires for every
/// completed evaluation, `improved` only when a configuration strictly beats
/// the best score so far.
pub trait SearchObserver {
    fn trial(&mut self, _result: &EvaluationResult) {}
    fn improved(&mut self, _result: &EvaluationResult) {}
}

pub struct SilentObserver;

impl SearchObserver for SilentObserver {}

/// A new best requires a strictly greater score; ties keep the earliest-found
/// configuration, so enumeration order decides them deterministically. A
/// candidate scoring zero never becomes best.
fn fold_best(
    best: Option<EvaluationResult>,
    candidate: EvaluationResult,
    observer: &mut dyn SearchObserver,
) -> Option<EvaluationResult> {
    observer.trial(&candidate);

    if candidate.score > best.map_or(0, |result| result.score) {
        observer.improved(&candidate);
        Some(candidate)
    } else {
        best
    }
}

/// Sweeps K over [0, N) on the unmasked dataset.
pub fn best_k(
    dataset: &Dataset,
    rule: &dyn VoteRule,
    observer: &mut dyn SearchObserver,
) -> Option<EvaluationResult> {
    sweep_k(dataset, DimensionMask::EMPTY, rule, None, observer)
}

/// Tries every non-empty dimension subset at a fixed K. Each trial works on a
/// fresh masked copy of the pristine scaled dataset. Trials with insufficient
/// data are skipped, the sweep continues.
pub fn best_subset(
    dataset: &Dataset,
    rule: &dyn VoteRule,
    k: usize,
    observer: &mut dyn SearchObserver,
) -> Option<EvaluationResult> {
    let mut best = None;

    for mask in non_empty_masks() {
        let working = dataset.with_masked_dimensions(mask);

        if let Ok(score) = leave_one_out(&working, rule, k) {
            let candidate = EvaluationResult {
                k,
                mask,
                score,
                data_size: working.len(),
            };
            best = fold_best(best, candidate, observer);
        }
    }

    best
}

/// Full sweep: every non-empty dimension subset crossed with every K in
/// [0, N).
pub fn best_k_and_subset(
    dataset: &Dataset,
    rule: &dyn VoteRule,
    observer: &mut dyn SearchObserver,
) -> Option<EvaluationResult> {
    let mut best = None;

    for mask in non_empty_masks() {
        let working = dataset.with_masked_dimensions(mask);
        best = sweep_k(&working, mask, rule, best, observer);
    }

    best
}

// the empty mask is a no-op trial and never enumerated
fn non_empty_masks() -> impl Iterator<Item = DimensionMask> {
    (1..1_u16 << DIMENSIONS).map(DimensionMask::from_bits)
}

fn sweep_k(
    dataset: &Dataset,
    mask: DimensionMask,
    rule: &dyn VoteRule,
    mut best: Option<EvaluationResult>,
    observer: &mut dyn SearchObserver,
) -> Option<EvaluationResult> {
    for k in 0..dataset.len() {
        if let Ok(score) = leave_one_out(dataset, rule, k) {
            let candidate = EvaluationResult {
                k,
                mask,
                score,
                data_size: dataset.len(),
            };
            best = fold_best(best, candidate, observer);
        }
    }

    best
}

//! Greedy search skeleton shared by forward selection and backward elimination.

use std::cmp::Ordering;
use std::time::Instant;

use rayon::prelude::*;
use sieve_nn::{Dataset, FeatureSubset, NnError, ScoredSubset, score};
use tracing::{debug, info, instrument, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::reporter::Reporter;
use crate::result::{RoundResult, SearchResult};
use crate::tracker::BestSoFar;

/// A scored neighbor tagged with the feature index that produced it.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) origin: usize,
    pub(crate) scored: ScoredSubset,
}

/// Pick the highest-accuracy candidate; equal accuracies go to the lowest
/// origin index regardless of position in `candidates`.
pub(crate) fn select_best(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().reduce(|best, c| {
        match c.scored.accuracy.total_cmp(&best.scored.accuracy) {
            Ordering::Greater => c,
            Ordering::Equal if c.origin < best.origin => c,
            _ => best,
        }
    })
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

/// Score every candidate of one round. Returns `Ok(None)` if the deadline
/// passes before the round is fully evaluated.
fn evaluate_round(
    dataset: &Dataset,
    candidates: Vec<(usize, FeatureSubset)>,
    parallel: bool,
    deadline: Option<Instant>,
) -> Result<Option<Vec<Candidate>>, NnError> {
    let evaluate = |(origin, subset): (usize, FeatureSubset)| -> Result<Option<Candidate>, NnError> {
        if expired(deadline) {
            return Ok(None);
        }
        let scored = score(dataset, subset)?;
        Ok(Some(Candidate { origin, scored }))
    };

    let evaluated: Vec<Option<Candidate>> = if parallel {
        candidates
            .into_par_iter()
            .map(evaluate)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut evaluated = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Some(c) = evaluate(candidate)? else {
                return Ok(None);
            };
            evaluated.push(Some(c));
        }
        evaluated
    };

    Ok(evaluated.into_iter().collect())
}

/// Run the greedy search described by `config` over `dataset`.
///
/// Round `j + 1` starts from round `j`'s winner, so rounds are sequential;
/// only the candidates within a round may be scored in parallel.
#[instrument(
    skip_all,
    fields(
        direction = %config.direction,
        n_features = dataset.n_features(),
        n_instances = dataset.n_instances(),
        parallel = config.parallel,
    )
)]
pub(crate) fn run<R: Reporter + ?Sized>(
    dataset: &Dataset,
    config: &SearchConfig,
    reporter: &mut R,
) -> Result<SearchResult, SearchError> {
    let deadline = config.deadline.map(|d| Instant::now() + d);
    let direction = config.direction;
    let n_features = dataset.n_features();

    reporter.search_started(direction, n_features, dataset.n_instances());

    let initial = score(dataset, direction.initial_subset(n_features))?;
    reporter.initial_evaluated(&initial);

    let mut tracker = BestSoFar::new();
    let mut current = initial.subset.clone();
    let mut rounds = Vec::with_capacity(n_features);
    let mut n_evaluations = 1usize;
    let mut completed = true;

    for round in 1..=n_features {
        let candidates = direction.candidates(&current, n_features);
        let n_candidates = candidates.len();

        let Some(evaluated) = evaluate_round(dataset, candidates, config.parallel, deadline)? else {
            warn!(round, "deadline reached, abandoning round");
            completed = false;
            break;
        };
        n_evaluations += n_candidates;

        let Some(winner) = select_best(evaluated) else {
            // Unreachable for n_features rounds: each round changes the subset by one.
            break;
        };
        debug!(
            round,
            origin = winner.origin,
            subset = %winner.scored.subset,
            accuracy = winner.scored.accuracy.value(),
            n_candidates,
            "round winner"
        );

        let selected = winner.scored;
        if tracker.observe(round, &selected)
            && let Some(best) = tracker.best()
        {
            reporter.accuracy_decreasing(round, &selected, best);
        }
        reporter.round_selected(round, &selected);
        let best_so_far = tracker.best().map_or(selected.accuracy, |b| b.accuracy);

        current = selected.subset.clone();
        rounds.push(RoundResult {
            round,
            selected,
            n_candidates,
            best_so_far,
        });
    }

    let warned_at = tracker.warned_at();
    // Only a deadline before the first round leaves the tracker empty.
    let (best_round, best) = tracker.into_best().unwrap_or_else(|| (0, initial.clone()));

    let result = SearchResult {
        direction,
        initial,
        rounds,
        best_round,
        warned_at,
        best,
        completed,
        n_evaluations,
    };

    info!(
        best_subset = %result.best.subset,
        best_accuracy = result.best.accuracy.value(),
        best_round = result.best_round,
        n_evaluations,
        completed,
        "search complete"
    );
    reporter.search_finished(&result);

    Ok(result)
}

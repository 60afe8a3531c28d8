//! The two sorting engines: exact binary-search insertion and
//! heuristic-assisted insertion.
//!
//! Both are generic over a fallible three-way comparator, so unit tests drive
//! them with plain closures while the binary wires them to judge-backed
//! oracles. Element movement is O(n²) worst case; the cost that matters is
//! never CPU time but the number of questions a human has to answer.

use std::cmp::Ordering;

use tracing::debug;

/// An item annotated with its current heuristic score.
///
/// `heuristic` starts as whatever the judge supplied and is afterwards touched
/// only by recalibration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<T> {
    pub value: T,
    pub heuristic: f64,
}

/// Insertion sort using binary search to place each element.
///
/// Sorts ascending per `compare`. An `Equal` answer at the probed midpoint
/// inserts immediately after it and ends that element's search: this trades
/// stability for one fewer question, knowingly — equal items may land in
/// either relative order.
///
/// With a memoizing comparator the judge answers O(n log n) questions. A
/// comparator error aborts the sort, leaving `seq` some permutation of its
/// input.
pub fn binary_insertion_sort<T, E, C>(seq: &mut [T], mut compare: C) -> Result<(), E>
where
    C: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut i = 1;
    while i < seq.len() {
        // seq[..i] is sorted; find where seq[i] belongs.
        let mut lower = 0;
        let mut upper = i;
        let mut inserted = false;
        while lower < upper {
            let j = (lower + upper) / 2;
            match compare(&seq[i], &seq[j])? {
                Ordering::Equal => {
                    shift(seq, i, j + 1);
                    inserted = true;
                    break;
                }
                Ordering::Less => upper = j,
                Ordering::Greater => lower = j + 1,
            }
        }
        if !inserted {
            shift(seq, i, lower);
        }
        i += 1;
    }
    Ok(())
}

/// Move `seq[src]` down to index `dst`, shifting everything between up by one.
fn shift<T>(seq: &mut [T], src: usize, dst: usize) {
    if src > dst {
        seq[dst..=src].rotate_right(1);
    }
}

/// Insertion sort that pre-places each item by an approximate score and spends
/// exact comparisons only to verify and correct the landing spot.
///
/// `score` is called exactly once per item, on first visit. After every step
/// the settled prefix is sorted by its (possibly recalibrated) heuristics and
/// agrees with every exact comparison made between adjacent items; the
/// recalibration keeps scores monotonic so later numeric settles stay
/// truthful.
pub fn heuristic_assisted_sort<T, E, C, S>(
    items: Vec<T>,
    mut compare: C,
    mut score: S,
) -> Result<Vec<ScoredItem<T>>, E>
where
    C: FnMut(&T, &T) -> Result<Ordering, E>,
    S: FnMut(&T) -> Result<f64, E>,
{
    let mut seq: Vec<ScoredItem<T>> = Vec::with_capacity(items.len());
    for (idx, value) in items.into_iter().enumerate() {
        let heuristic = score(&value)?;
        seq.push(ScoredItem { value, heuristic });

        // Numeric settle: walk left while the new score undercuts its neighbor.
        let mut j = idx;
        while j > 0 && seq[j].heuristic < seq[j - 1].heuristic {
            seq.swap(j, j - 1);
            j -= 1;
        }

        // Forward correction: the settle can land the item below where the
        // exact order wants it.
        let mut moved = false;
        while j < idx && compare(&seq[j].value, &seq[j + 1].value)? == Ordering::Greater {
            seq.swap(j, j + 1);
            j += 1;
            moved = true;
        }

        // Backward correction, only when forward found nothing to fix: the
        // settle leaves at most one side in disagreement.
        if !moved {
            while j > 0 && compare(&seq[j].value, &seq[j - 1].value)? == Ordering::Less {
                seq.swap(j, j - 1);
                j -= 1;
            }
        }

        recalibrate(&mut seq, idx, j);
        debug!(idx, resting = j, heuristic = seq[j].heuristic, "item settled");
    }
    Ok(seq)
}

/// Adjust the heuristic at the resting index `j` so the settled prefix's
/// scores stay non-decreasing.
fn recalibrate<T>(seq: &mut [ScoredItem<T>], idx: usize, j: usize) {
    if j > 0 && j < idx {
        // Interior landing: smooth toward the neighbors' mean.
        seq[j].heuristic = (seq[j - 1].heuristic + seq[j + 1].heuristic) / 2.0;
    } else if idx > 0 && j == 0 && seq[0].heuristic > seq[1].heuristic {
        // New minimum: push strictly below its successor.
        seq[0].heuristic = seq[1].heuristic - 1.0;
    } else if idx > 0 && j == idx && seq[idx].heuristic < seq[idx - 1].heuristic {
        // New maximum: push strictly above its predecessor.
        seq[idx].heuristic = seq[idx - 1].heuristic + 1.0;
    }
}

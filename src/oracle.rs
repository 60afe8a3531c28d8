//! Memoized comparison and one-shot scoring oracles over a [`Judge`].
//!
//! A human answering the same question twice is the one cost this crate can
//! always avoid, so the comparison oracle caches every judgement for its own
//! lifetime. The cache is owned by the oracle value — constructed before a
//! sort begins, dropped with it — never process-global.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::judge::{Judge, JudgeError};

/// Interaction counters for a single sort invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleStats {
    /// Distinct questions the judge actually answered.
    pub questions_asked: usize,
    /// Comparisons served from the cache with no judge interaction.
    pub cache_hits: usize,
}

/// Three-way comparator backed by a judge, memoized per ordered pair.
///
/// The cache keys on the exact `(a, b)` tuple as queried: the same unordered
/// pair asked in the opposite order is a distinct entry. The judge is not
/// assumed symmetric; in practice each unordered pair is asked once because
/// call sites consistently pass the item under placement first.
pub struct ComparisonOracle<J> {
    judge: J,
    cache: HashMap<(String, String), Ordering>,
    stats: OracleStats,
}

impl<J: Judge> ComparisonOracle<J> {
    pub fn new(judge: J) -> Self {
        Self {
            judge,
            cache: HashMap::new(),
            stats: OracleStats::default(),
        }
    }

    /// Ask whether `a` orders below, equal to, or above `b`.
    ///
    /// A cache miss blocks on the judge, re-prompting until the trimmed reply
    /// is one of `<`, `=`, `>`. Nothing is recorded until a valid reply
    /// arrives, so a malformed answer can never corrupt the cache.
    pub fn compare(&mut self, a: &str, b: &str) -> Result<Ordering, JudgeError> {
        let key = (a.to_owned(), b.to_owned());
        if let Some(&ordering) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            debug!(a, b, ?ordering, "comparison served from cache");
            return Ok(ordering);
        }

        let prompt = format!("Which is greater, {a} or {b} (<, =, or >)? ");
        let ordering = loop {
            let reply = self.judge.ask(&prompt)?;
            match parse_comparison_reply(&reply) {
                Some(ordering) => break ordering,
                None => debug!(reply = reply.trim(), "unrecognized reply, asking again"),
            }
        };
        self.stats.questions_asked += 1;
        self.cache.insert(key, ordering);
        Ok(ordering)
    }

    pub fn stats(&self) -> OracleStats {
        self.stats
    }

    pub fn judge(&self) -> &J {
        &self.judge
    }
}

fn parse_comparison_reply(reply: &str) -> Option<Ordering> {
    match reply.trim() {
        "<" => Some(Ordering::Less),
        "=" => Some(Ordering::Equal),
        ">" => Some(Ordering::Greater),
        _ => None,
    }
}

/// Approximate numeric scorer backed by a judge.
///
/// Deliberately not memoized: callers only score an item on first visit, and
/// from then on the stored score belongs to the sort (which may recalibrate
/// it) — the judge is never asked about the item again.
pub struct HeuristicOracle<J> {
    judge: J,
    questions_asked: usize,
}

impl<J: Judge> HeuristicOracle<J> {
    pub fn new(judge: J) -> Self {
        Self {
            judge,
            questions_asked: 0,
        }
    }

    /// Ask for a rough score, re-prompting until the reply parses as a finite
    /// float.
    pub fn score(&mut self, item: &str) -> Result<f64, JudgeError> {
        let prompt = format!("Give an approximate numeric score to item {item}: ");
        let value = loop {
            let reply = self.judge.ask(&prompt)?;
            match reply.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => break value,
                _ => debug!(reply = reply.trim(), "not a finite number, asking again"),
            }
        };
        self.questions_asked += 1;
        Ok(value)
    }

    pub fn questions_asked(&self) -> usize {
        self.questions_asked
    }

    pub fn judge(&self) -> &J {
        &self.judge
    }
}

//! Heuristic-assisted sessions: scoring, exact correction, and recalibration.

use ordinal_harness::{
    heuristic_assisted_sort, ComparisonOracle, HeuristicOracle, JudgeError, ScriptedJudge,
    ScoredItem,
};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn order(ranked: &[ScoredItem<String>]) -> Vec<&str> {
    ranked.iter().map(|s| s.value.as_str()).collect()
}

#[test]
fn singleton_costs_exactly_one_scoring_question() {
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new(Vec::<String>::new()));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(["4.2"]));

    let ranked = heuristic_assisted_sort(
        labels(&["x"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    )
    .unwrap();

    assert_eq!(order(&ranked), ["x"]);
    assert_eq!(scores.questions_asked(), 1);
    assert_eq!(comparisons.stats().questions_asked, 0);
}

#[test]
fn misleading_score_is_corrected_and_recalibrated() {
    // the judge scores a=5.0 and b=2.0 but insists a < b exactly: the numeric
    // settle puts b first, the forward pass undoes it, and recalibration
    // pushes b's score above a's so the prefix stays monotonic.
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new([">"]));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(["5.0", "2.0"]));

    let ranked = heuristic_assisted_sort(
        labels(&["a", "b"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    )
    .unwrap();

    assert_eq!(order(&ranked), ["a", "b"]);
    assert_eq!(ranked[0].heuristic, 5.0);
    assert_eq!(ranked[1].heuristic, 6.0);

    // the one exact question probed the settled (b, a) boundary
    let prompts: Vec<&str> = comparisons
        .judge()
        .transcript()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(prompts, ["Which is greater, b or a (<, =, or >)? "]);
}

#[test]
fn new_minimum_is_pushed_below_its_successor() {
    // scores agree with insertion order, the exact answer does not: b settles
    // at the top, the backward pass walks it to the front, and recalibration
    // pushes its score strictly below a's.
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new(["<"]));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(["1.0", "5.0"]));

    let ranked = heuristic_assisted_sort(
        labels(&["a", "b"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    )
    .unwrap();

    assert_eq!(order(&ranked), ["b", "a"]);
    assert_eq!(ranked[0].heuristic, 0.0);
    assert_eq!(ranked[1].heuristic, 1.0);
}

#[test]
fn interior_landing_takes_the_neighbor_mean() {
    // exact order is a < c < b; c's supplied score lands it between the two
    // and gets smoothed to the mean of its neighbors.
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new([">", "<", ">"]));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(["10", "20", "11"]));

    let ranked = heuristic_assisted_sort(
        labels(&["a", "b", "c"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    )
    .unwrap();

    assert_eq!(order(&ranked), ["a", "c", "b"]);
    let heuristics: Vec<f64> = ranked.iter().map(|s| s.heuristic).collect();
    assert_eq!(heuristics, [10.0, 15.0, 20.0]);
}

#[test]
fn prefix_heuristics_stay_monotonic_when_scores_fight_the_judge() {
    // every supplied score is backwards from the exact order; the forward
    // passes fix each placement and recalibration keeps the scores monotonic.
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new([">"; 6]));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(["4", "3", "2", "1"]));

    let ranked = heuristic_assisted_sort(
        labels(&["p", "q", "r", "s"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    )
    .unwrap();

    assert_eq!(order(&ranked), ["p", "q", "r", "s"]);
    assert!(ranked.windows(2).all(|w| w[0].heuristic <= w[1].heuristic));
    assert_eq!(scores.questions_asked(), 4);
}

#[test]
fn disconnected_scorer_aborts_the_sort() {
    let mut comparisons = ComparisonOracle::new(ScriptedJudge::new(Vec::<String>::new()));
    let mut scores = HeuristicOracle::new(ScriptedJudge::new(Vec::<String>::new()));

    let result = heuristic_assisted_sort(
        labels(&["a", "b"]),
        |a: &String, b: &String| comparisons.compare(a, b),
        |item: &String| scores.score(item),
    );
    assert!(matches!(result, Err(JudgeError::Disconnected)));
}

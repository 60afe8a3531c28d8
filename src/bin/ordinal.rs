#![forbid(unsafe_code)]

use std::io::{self, BufRead};

use clap::Parser;

use ordinal_harness::{
    binary_insertion_sort, heuristic_assisted_sort, ComparisonOracle, ConsoleJudge,
    HeuristicOracle, OracleStats,
};

/// Rank a list of items by asking the person at the terminal to judge them.
///
/// Items come from the command line, or one per line on stdin when none are
/// given. The most preferred item prints first.
#[derive(Parser)]
#[command(name = "ordinal", version, about)]
struct Cli {
    /// Items to rank; read one per line from stdin when omitted
    items: Vec<String>,

    /// Pre-place each item with a rough numeric score, then verify with a
    /// handful of exact questions
    #[arg(long)]
    heuristic: bool,

    /// Report how many questions were asked, on stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut items = cli.items;
    if items.is_empty() {
        for line in io::stdin().lock().lines() {
            items.push(line?.trim().to_string());
        }
    }

    let ranked = if cli.heuristic {
        let mut comparisons = ComparisonOracle::new(ConsoleJudge::new());
        let mut scores = HeuristicOracle::new(ConsoleJudge::new());
        let scored = heuristic_assisted_sort(
            items,
            |a: &String, b: &String| comparisons.compare(a, b),
            |item: &String| scores.score(item),
        )?;
        if cli.stats {
            report_stats(comparisons.stats(), Some(scores.questions_asked()));
        }
        scored.into_iter().map(|s| s.value).collect()
    } else {
        let mut comparisons = ComparisonOracle::new(ConsoleJudge::new());
        binary_insertion_sort(&mut items, |a: &String, b: &String| comparisons.compare(a, b))?;
        if cli.stats {
            report_stats(comparisons.stats(), None);
        }
        items
    };

    for item in ranked.iter().rev() {
        println!("* {item}");
    }
    Ok(())
}

fn report_stats(comparisons: OracleStats, scores: Option<usize>) {
    eprintln!(
        "comparison questions: {} ({} answered from cache)",
        comparisons.questions_asked, comparisons.cache_hits
    );
    if let Some(asked) = scores {
        eprintln!("scoring questions: {asked}");
    }
}

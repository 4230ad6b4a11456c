use knn::classify::{MajorityVote, VoteRule, WeightedVote};
use knn::evaluate::{leave_one_out, EvaluationResult};
use knn::scale::FeatureScaler;
use knn::search::{best_k, best_k_and_subset, best_subset, SearchObserver};

struct ConsoleReporter;

impl SearchObserver for ConsoleReporter {
    fn improved(&mut self, result: &EvaluationResult) {
        println!("best so far: {result}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const DATA_FILEPATH: &str = "data/dive-data.txt";

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DATA_FILEPATH.to_string());

    let observations = knn::parse::parse(&path)?;
    assert!(!observations.is_empty());

    let scaler = FeatureScaler::fit(&observations)?;
    if let Err(warning) = scaler.ensure_no_degenerate_dimensions() {
        eprintln!("warning: {warning}");
    }
    let dataset = scaler.transform(&observations);

    const K: usize = 3;

    let majority = MajorityVote;
    let weighted = WeightedVote;
    let mut reporter = ConsoleReporter;

    for (name, rule) in [
        ("majority", &majority as &dyn VoteRule),
        ("weighted", &weighted as &dyn VoteRule),
    ] {
        let score = leave_one_out(&dataset, rule, K)?;
        println!(
            "{name} vote [K = {K}] [{score}/{}] [{:.0}%]",
            dataset.len(),
            score as f64 / dataset.len() as f64 * 100.0
        );

        if let Some(best) = best_k(&dataset, rule, &mut reporter) {
            println!("{name} vote, best K: {best}");
        }
    }

    if let Some(best) = best_subset(&dataset, &weighted, K, &mut reporter) {
        println!("weighted vote, best subset at K = {K}: {best}");
    }

    if let Some(best) = best_k_and_subset(&dataset, &weighted, &mut reporter) {
        println!("weighted vote, best K and subset overall: {best}");
    }

    Ok(())
}

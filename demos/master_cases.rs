//! Side by side: the recursion-tree regime label and the numeric
//! Master-Method estimate for every built-in recurrence.
//!
//! Run with `cargo run --example master_cases`.

use recurrence_lab::catalog;
use recurrence_lab::{analyze_with_estimate, MasterConfig};

fn main() -> anyhow::Result<()> {
    let config = MasterConfig::default();
    let n = 1 << 10;

    println!(
        "{:<20} {:<24} {:<12} {:>10}  {}",
        "name", "recurrence", "tree", "ratio", "estimate"
    );
    for recurrence in catalog::BUILTIN {
        let (result, estimate) = analyze_with_estimate(&recurrence, n, &config)?;
        println!(
            "{:<20} {:<24} {:<12} {:>10.4}  {}",
            recurrence.name,
            recurrence.label(),
            result.dominant_regime.to_string(),
            estimate.ratio,
            estimate.solution(&recurrence.shape.to_string())
        );
    }
    Ok(())
}

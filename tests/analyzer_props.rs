use num_bigint::BigUint;
use num_traits::ToPrimitive;
use proptest::prelude::*;
use recurrence_lab::catalog::WorkShape;
use recurrence_lab::{analyze, DominantRegime, RecurrenceSpec, DOMINANCE_THRESHOLD};

/// floor(log_b n) + 1, computed with exact integer powers.
fn expected_levels(b: u64, n: u64) -> usize {
    let mut levels = 1;
    let (b, n) = (u128::from(b), u128::from(n));
    let mut power = b;
    while power <= n {
        levels += 1;
        power *= b;
    }
    levels
}

fn shapes() -> impl Strategy<Value = WorkShape> {
    prop::sample::select(WorkShape::ALL.to_vec())
}

proptest! {
    #[test]
    fn level_count_matches_integer_logarithm(
        a in 1u64..8,
        b in 2u64..=10,
        n in 1u64..(1 << 40),
        shape in shapes(),
    ) {
        let result = analyze(&RecurrenceSpec::new(a, b as f64, n, shape.as_fn()))
            .expect("valid recurrence");
        prop_assert_eq!(result.levels.len(), expected_levels(b, n));
        prop_assert!(result.levels.iter().all(|l| l.size_per_node >= 1.0));
    }

    #[test]
    fn level_count_is_exact_for_sizes_past_f64_precision(
        b in 2u64..=10,
        n in (1u64 << 53)..=u64::MAX,
    ) {
        let result = analyze(&RecurrenceSpec::new(1, b as f64, n, |_| 1.0))
            .expect("valid recurrence");
        prop_assert_eq!(result.levels.len(), expected_levels(b, n));
        prop_assert!(result.levels.iter().all(|l| l.size_per_node >= 1.0));
    }

    #[test]
    fn node_counts_are_powers_of_a(
        a in 1u64..16,
        b in 2.0f64..8.0,
        n in 1u64..100_000,
    ) {
        let result = analyze(&RecurrenceSpec::new(a, b, n, |s| s)).expect("valid recurrence");
        for level in &result.levels {
            prop_assert_eq!(&level.node_count, &BigUint::from(a).pow(level.level));
            let count = level.node_count.to_f64().unwrap_or(f64::INFINITY);
            prop_assert_eq!(level.level_work, count * level.work_per_node);
        }
        let indices: Vec<u32> = result.levels.iter().map(|l| l.level).collect();
        let expected: Vec<u32> = (0..result.levels.len() as u32).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn total_is_the_sum_of_levels(
        a in 1u64..8,
        b in 1.5f64..6.0,
        n in 1u64..1_000_000,
        shape in shapes(),
    ) {
        let result = analyze(&RecurrenceSpec::new(a, b, n, shape.as_fn()))
            .expect("valid recurrence");
        let sum: f64 = result.levels.iter().map(|l| l.level_work).sum();
        let tolerance = 1e-9 * sum.abs().max(1.0);
        prop_assert!((result.total_work - sum).abs() <= tolerance);
        prop_assert!(result.total_work >= 0.0);
    }

    #[test]
    fn analysis_is_idempotent(
        a in 1u64..8,
        b in 1.5f64..6.0,
        n in 1u64..1_000_000,
        shape in shapes(),
    ) {
        let spec = RecurrenceSpec::new(a, b, n, shape.as_fn());
        let first = analyze(&spec).expect("valid recurrence");
        let second = analyze(&spec).expect("valid recurrence");
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn regime_follows_the_half_rule(
        a in 1u64..8,
        b in 1.5f64..6.0,
        n in 1u64..1_000_000,
        shape in shapes(),
    ) {
        let result = analyze(&RecurrenceSpec::new(a, b, n, shape.as_fn()))
            .expect("valid recurrence");
        let half = DOMINANCE_THRESHOLD * result.total_work;
        let expected = if result.leaf_work() > half {
            DominantRegime::LeafHeavy
        } else if result.root_work() > half {
            DominantRegime::RootHeavy
        } else {
            DominantRegime::Balanced
        };
        prop_assert_eq!(result.dominant_regime, expected);
    }
}

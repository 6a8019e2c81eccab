//! Property-based tests for the ranking metrics: score bounds, truncation invariance,
//! ideal orderings, and MRR/AUC edge behavior across randomized inputs.

use proptest::prelude::*;

use rankmetrics::{
    Auc, FMeasure, Mrr, Ncrr, Ndcg, Precision, RankingError, RankingInput, RankingMetric, Recall,
    ALL_ITEMS,
};

// ── Strategies ────────────────────────────────────────────────────────

/// A binary relevance vector with at least one positive and one negative, plus a random
/// permutation of its item ids as the prediction.
fn arb_binary_case() -> impl Strategy<Value = (Vec<f64>, Vec<usize>)> {
    (2_usize..40)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::bool::ANY, n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
        })
        .prop_filter("needs a positive and a negative", |(mask, _)| {
            mask.iter().any(|&b| b) && mask.iter().any(|&b| !b)
        })
        .prop_map(|(mask, rank)| {
            let gt: Vec<f64> = mask.into_iter().map(|b| if b { 1.0 } else { 0.0 }).collect();
            (gt, rank)
        })
}

/// Graded relevance (0..=3) with at least one non-zero grade, and a shuffled ranking.
fn arb_graded_case() -> impl Strategy<Value = (Vec<f64>, Vec<usize>)> {
    (1_usize..30)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0_u8..=3, n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
        })
        .prop_filter("needs a relevant item", |(grades, _)| {
            grades.iter().any(|&g| g > 0)
        })
        .prop_map(|(grades, rank)| (grades.into_iter().map(f64::from).collect::<Vec<f64>>(), rank))
}

/// A score that is occasionally NaN, with either sign bit.
fn arb_score() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0_f64..1.0,
        1 => Just(f64::NAN),
        1 => Just(-f64::NAN),
    ]
}

/// Direct O(P·N) count of positives strictly above negatives.
fn pairwise_auc(scores: &[f64], gt_pos: &[f64], gt_neg: &[f64]) -> f64 {
    let pick = |mask: &[f64]| -> Vec<f64> {
        scores
            .iter()
            .zip(mask)
            .filter(|(_, &m)| m > 0.0)
            .map(|(&s, _)| s)
            .collect()
    };
    let (pos, neg) = (pick(gt_pos), pick(gt_neg));
    let total: f64 = pos
        .iter()
        .map(|&p| neg.iter().filter(|&&n| p > n).count() as f64 / neg.len() as f64)
        .sum();
    total / pos.len() as f64
}

fn in_unit_interval(score: f64) -> bool {
    (0.0..=1.0 + 1e-9).contains(&score)
}

proptest! {
    #[test]
    fn ndcg_is_bounded((gt, rank) in arb_graded_case(), k in -1_i32..40) {
        let score = Ndcg::new(k).compute(&RankingInput::new(&gt, &rank)).unwrap();
        prop_assert!(in_unit_interval(score), "NDCG@{}={}", k, score);
    }

    #[test]
    fn ndcg_ignores_depth_beyond_list((gt, rank) in arb_graded_case(), extra in 0_i32..10) {
        let input = RankingInput::new(&gt, &rank);
        let full = Ndcg::new(ALL_ITEMS).compute(&input).unwrap();
        let deep = Ndcg::new(rank.len() as i32 + extra).compute(&input).unwrap();
        prop_assert_eq!(full, deep);
    }

    #[test]
    fn relevant_first_is_ideal((gt, _) in arb_binary_case()) {
        let mut rank: Vec<usize> = (0..gt.len()).filter(|&i| gt[i] > 0.0).collect();
        rank.extend((0..gt.len()).filter(|&i| gt[i] <= 0.0));
        let input = RankingInput::new(&gt, &rank);
        prop_assert!((Ndcg::new(ALL_ITEMS).compute(&input).unwrap() - 1.0).abs() < 1e-9);
        prop_assert!((Ncrr::new(ALL_ITEMS).compute(&input).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ncrr_and_mrr_are_bounded((gt, rank) in arb_binary_case()) {
        let input = RankingInput::new(&gt, &rank);
        prop_assert!(in_unit_interval(Ncrr::new(ALL_ITEMS).compute(&input).unwrap()));
        // a full permutation always contains a positive
        prop_assert!(in_unit_interval(Mrr::new().compute(&input).unwrap()));
    }

    #[test]
    fn mrr_without_positive_predictions_errors((gt, rank) in arb_binary_case()) {
        let negatives_only: Vec<usize> = rank.into_iter().filter(|&i| gt[i] <= 0.0).collect();
        let result = Mrr::new().compute(&RankingInput::new(&gt, &negatives_only));
        prop_assert!(matches!(result, Err(RankingError::NoMatch)));
    }

    #[test]
    fn measures_at_k_are_bounded((gt, rank) in arb_binary_case(), k in 1_i32..40) {
        let input = RankingInput::new(&gt, &rank);
        let precision = Precision::new(k).compute(&input).unwrap();
        let recall = Recall::new(k).compute(&input).unwrap();
        let f1 = FMeasure::new(k).compute(&input).unwrap();
        prop_assert!(in_unit_interval(precision));
        prop_assert!(in_unit_interval(recall));
        prop_assert!(in_unit_interval(f1));
        prop_assert!(f1 <= precision.max(recall) + 1e-9);
    }

    #[test]
    fn auc_is_bounded(
        (gt, _) in arb_binary_case(),
        seed in prop::collection::vec(0.0_f64..1.0, 40),
    ) {
        let scores: Vec<f64> = seed[..gt.len()].to_vec();
        let gt_neg: Vec<f64> = gt.iter().map(|&g| 1.0 - g).collect();
        let input = RankingInput::new(&gt, &[])
            .with_negatives(&gt_neg)
            .with_scores(&scores);
        let score = Auc::new().compute(&input).unwrap();
        prop_assert!(in_unit_interval(score), "AUC={}", score);
    }

    #[test]
    fn auc_matches_pairwise_count(
        (gt, _) in arb_binary_case(),
        seed in prop::collection::vec(arb_score(), 40),
    ) {
        let scores: Vec<f64> = seed[..gt.len()].to_vec();
        let gt_neg: Vec<f64> = gt.iter().map(|&g| 1.0 - g).collect();
        let input = RankingInput::new(&gt, &[])
            .with_negatives(&gt_neg)
            .with_scores(&scores);
        let score = Auc::new().compute(&input).unwrap();
        let expected = pairwise_auc(&scores, &gt, &gt_neg);
        prop_assert!((score - expected).abs() < 1e-12, "AUC={} pairwise={}", score, expected);
    }
}

#[test]
fn precision_recall_f1_worked_example() {
    let gt = [1.0, 0.0, 1.0, 0.0];
    let rank = [0, 1, 2, 3];
    let input = RankingInput::new(&gt, &rank);
    for metric in [
        Box::new(Precision::new(2)) as Box<dyn RankingMetric>,
        Box::new(Recall::new(2)),
        Box::new(FMeasure::new(2)),
    ] {
        let score = metric.compute(&input).unwrap();
        assert!((score - 0.5).abs() < 1e-12, "{} = {}", metric.name(), score);
    }
}

#[test]
fn auc_worked_example_and_ties() {
    let gt_pos = [1.0, 0.0, 0.0, 0.0];
    let gt_neg = [0.0, 1.0, 0.0, 1.0];
    let strict = [0.9, 0.1, 0.5, 0.2];
    let tied = [0.2, 0.1, 0.5, 0.2];

    let score = |scores: &[f64]| {
        let input = RankingInput::new(&gt_pos, &[])
            .with_negatives(&gt_neg)
            .with_scores(scores);
        Auc::new().compute(&input).unwrap()
    };

    assert_eq!(score(&strict), 1.0);
    assert_eq!(score(&tied), 0.5);
    assert!(score(&tied) < score(&strict));
}

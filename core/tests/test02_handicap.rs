mod common;

use common::{date, round};
use golf_stats_core::model::Round;
use golf_stats_core::stats::{
    HandicapConfig, HandicapStep, calculate_handicap, calculate_handicap_with,
};

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

/// Rounds on consecutive days with the given 18-hole scores against 72/113.
fn history(scores: &[i32]) -> Vec<Round> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            let day = date(2025, 1, 1) + chrono::Days::new(i as u64);
            round(i as i64 + 1, day, 18, score)
        })
        .collect()
}

#[test]
fn test01_too_few_rounds_is_a_message() {
    let result = calculate_handicap(&history(&[90, 88]));
    assert_eq!(result.handicap, None);
    assert_eq!(
        result.message.as_deref(),
        Some("Need 1 more round to calculate a handicap")
    );

    let result = calculate_handicap(&[]);
    assert_eq!(result.handicap, None);
    assert_eq!(
        result.message.as_deref(),
        Some("Need 3 more rounds to calculate a handicap")
    );
}

#[test]
fn test02_three_rounds_uses_the_best() {
    let result = calculate_handicap(&history(&[90, 85, 95]));
    assert!(approx(result.handicap, 13.0));
    assert_eq!(result.message, None);
}

#[test]
fn test03_slope_and_rating_adjust_differential() {
    let mut rounds = history(&[90, 90, 90]);
    for r in &mut rounds {
        r.rating = Some(70.0);
        r.slope = Some(130.0);
    }
    // (90 - 70) * 113 / 130 = 17.3846...
    assert!(approx(calculate_handicap(&rounds).handicap, 17.4));
}

#[test]
fn test04_missing_rating_and_slope_use_neutral_values() {
    let mut rounds = history(&[80, 80, 80]);
    for r in &mut rounds {
        r.rating = None;
        r.slope = None;
    }
    assert!(approx(calculate_handicap(&rounds).handicap, 8.0));
}

#[test]
fn test05_best_eight_of_most_recent_twenty() {
    // five old excellent rounds fall outside the window
    let mut scores = vec![70; 5];
    scores.extend([80, 81, 82, 83, 84, 85, 86, 87].iter());
    scores.extend(vec![100; 12]);
    let result = calculate_handicap(&history(&scores));
    // best eight in the window: 80..=87, differentials 8..=15, mean 11.5
    assert!(approx(result.handicap, 11.5));
}

#[test]
fn test06_plus_handicap_keeps_its_sign() {
    let result = calculate_handicap(&history(&[70, 69, 71]));
    assert!(approx(result.handicap, -3.0));
}

#[test]
fn test07_unscored_rounds_are_excluded() {
    let mut rounds = history(&[90, 85, 95]);
    rounds[1].score = None;
    let result = calculate_handicap(&rounds);
    assert_eq!(result.handicap, None);
    assert!(result.message.is_some());
}

#[test]
fn test08_input_order_does_not_matter() {
    let mut rounds = history(&[
        90, 85, 95, 88, 92, 79, 101, 84, 86, 93, 90, 85, 95, 88, 92, 79, 101, 84, 86, 93, 77, 99,
    ]);
    // same-day ties straddling the window boundary
    rounds[1].date = rounds[2].date;
    rounds[2].score = Some(72);
    let forward = calculate_handicap(&rounds);
    rounds.reverse();
    let backward = calculate_handicap(&rounds);
    rounds.swap(0, 7);
    rounds.swap(3, 15);
    let shuffled = calculate_handicap(&rounds);

    assert_eq!(forward, backward);
    assert_eq!(forward, shuffled);
    assert!(forward.handicap.is_some());
}

#[test]
fn test09_custom_table() {
    let config = HandicapConfig {
        min_rounds: 2,
        window: 4,
        table: vec![
            HandicapStep { rounds: 2, best: 1 },
            HandicapStep { rounds: 4, best: 2 },
        ],
    };
    assert!(config.validate().is_ok());

    let two = calculate_handicap_with(&history(&[90, 80]), &config);
    assert!(approx(two.handicap, 8.0));

    // oldest round (70) drops out of the 4-round window
    let five = calculate_handicap_with(&history(&[70, 90, 80, 84, 100]), &config);
    assert!(approx(five.handicap, 10.0));
}

#[test]
fn test10_invalid_table_gives_no_index() {
    let config = HandicapConfig {
        min_rounds: 1,
        window: 20,
        table: vec![HandicapStep { rounds: 1, best: 0 }],
    };
    let result = calculate_handicap_with(&history(&[90, 85, 80]), &config);
    assert_eq!(result.handicap, None);
    let message = result.message.unwrap_or_default();
    assert!(message.contains("invalid handicap config"), "{message}");
}

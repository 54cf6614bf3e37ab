//! Unit tests for the beach condition scorer.

use beach_core::{
    ConditionScorer, MAX_SCORE, MIN_SCORE, ScoreTier, SeaState, ThresholdScorer, WeatherReading,
    score,
};
use rstest::rstest;

const TOLERANCE: f64 = 1e-9;

fn reading(code: i32, temperature: f64, wind: f64, wave: Option<f64>) -> WeatherReading {
    let base = WeatherReading::new(code, temperature, wind).expect("finite inputs");
    match wave {
        Some(metres) => base.with_wave_height(metres),
        None => base,
    }
}

#[rstest]
// Sunny, warm, flat sea: every signal maxes out.
#[case(0, 28.0, 8.0, Some(0.2), 5.0, "5,0", SeaState::Calm)]
// Overcast and cool, no marine data so wind drives the sea.
#[case(3, 18.0, 22.0, None, 2.0, "2,0", SeaState::Choppy)]
// Thunderstorm, cold, big waves: the raw -2.0 clamps to the floor.
#[case(97, 12.0, 35.0, Some(1.8), 1.0, "1,0", SeaState::Rough)]
// Partly cloudy and warm with a light breeze.
#[case(1, 26.0, 12.0, None, 4.0, "4,0", SeaState::Calm)]
// Fog is neutral: 0 + 2 + 2 = 4 → 2.0.
#[case(45, 22.0, 15.0, None, 2.0, "2,0", SeaState::Choppy)]
// Odd totals keep their half point: 4 + 1 + 2 = 7 → 3.5.
#[case(0, 21.0, 12.0, Some(1.0), 3.5, "3,5", SeaState::Choppy)]
fn scores_reference_conditions(
    #[case] code: i32,
    #[case] temperature: f64,
    #[case] wind: f64,
    #[case] wave: Option<f64>,
    #[case] expected_raw: f64,
    #[case] expected_display: &str,
    #[case] expected_sea: SeaState,
) {
    let result = score(&reading(code, temperature, wind, wave));
    assert!((result.raw_score - expected_raw).abs() <= TOLERANCE);
    assert_eq!(result.display_score, expected_display);
    assert_eq!(result.sea_state, expected_sea);
    assert_eq!(result.sea_label, expected_sea.label());
}

#[rstest]
fn breakdown_explains_the_first_reference_case() {
    let result = score(&reading(0, 28.0, 8.0, Some(0.2)));
    assert_eq!(result.breakdown.sky, 4);
    assert_eq!(result.breakdown.sea, 3);
    assert_eq!(result.breakdown.temperature, 3);
    assert_eq!(result.breakdown.total(), 10);
}

#[rstest]
fn clamps_the_ceiling() {
    let result = score(&reading(0, 30.0, 0.0, Some(0.0)));
    assert!((result.raw_score - MAX_SCORE).abs() <= TOLERANCE);
}

#[rstest]
#[case(f64::MAX, f64::MAX, Some(f64::MAX))]
#[case(-f64::MAX, -f64::MAX, Some(-f64::MAX))]
#[case(-273.0, 500.0, None)]
fn extreme_inputs_stay_in_range(
    #[case] temperature: f64,
    #[case] wind: f64,
    #[case] wave: Option<f64>,
) {
    let result = score(&reading(i32::MIN, temperature, wind, wave));
    assert!((MIN_SCORE..=MAX_SCORE).contains(&result.raw_score));
}

#[rstest]
fn informational_fields_do_not_change_the_score() {
    let base = reading(2, 23.0, 18.0, Some(0.6));
    let decorated = base.with_wave_period(14.0).with_uv_index(11.0);
    assert_eq!(score(&base), score(&decorated));
}

#[rstest]
fn trait_and_free_function_agree() {
    let sample = reading(61, 19.0, 26.0, None);
    assert_eq!(ThresholdScorer.score(&sample), score(&sample));
}

#[rstest]
#[case(reading(0, 28.0, 8.0, Some(0.2)), ScoreTier::Ideal)]
#[case(reading(0, 21.0, 12.0, Some(1.0)), ScoreTier::Fair)]
#[case(reading(3, 18.0, 22.0, None), ScoreTier::Poor)]
fn tiers_follow_raw_score(#[case] sample: WeatherReading, #[case] expected: ScoreTier) {
    assert_eq!(score(&sample).tier(), expected);
}

#[cfg(feature = "serde")]
#[rstest]
fn serialises_sea_state_as_screaming_case() {
    let result = score(&reading(97, 12.0, 35.0, Some(1.8)));
    let json = serde_json::to_value(&result).expect("serialise result");
    assert_eq!(json["sea_state"], "ROUGH");
    assert_eq!(json["display_score"], "1,0");
}

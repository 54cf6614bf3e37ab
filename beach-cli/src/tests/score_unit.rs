//! Focused unit tests covering score CLI configuration and reporting.

use super::helpers::{FORECAST_JSON, MARINE_ERROR_JSON, MARINE_JSON, Workspace};
use super::*;
use beach_core::{ScoreTier, SeaState, SkyCondition, ThresholdScorer};
use beach_data::load_snapshot;
use camino::Utf8PathBuf;
use crate::score::{
    DEFAULT_FORECAST_DAYS, ScoreConfig, build_report, config_from_layers_for_test, run_score_with,
};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

#[derive(Debug, Copy, Clone)]
enum MissingSource {
    Forecast,
    Marine,
}

#[rstest]
fn converting_score_without_forecast_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing forecast");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SCORE_FORECAST);
            assert_eq!(env, ENV_SCORE_FORECAST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn score_config_defaults_forecast_days() {
    let args = ScoreArgs {
        forecast: Some(Utf8PathBuf::from("forecast.json")),
        ..ScoreArgs::default()
    };

    let config = ScoreConfig::try_from(args).expect("config should build");

    assert_eq!(config.days, DEFAULT_FORECAST_DAYS);
    assert_eq!(config.marine, None);
}

#[rstest]
#[case::missing_forecast(ARG_SCORE_FORECAST, MissingSource::Forecast)]
#[case::missing_marine(ARG_SCORE_MARINE, MissingSource::Marine)]
fn validate_sources_reports_missing_payloads(
    workspace: Workspace,
    #[case] expected_field: &'static str,
    #[case] missing: MissingSource,
) {
    let forecast = workspace.path("forecast.json");
    let marine = workspace.path("marine.json");
    if !matches!(missing, MissingSource::Forecast) {
        workspace.write("forecast.json", FORECAST_JSON);
    }
    if !matches!(missing, MissingSource::Marine) {
        workspace.write("marine.json", MARINE_JSON);
    }
    let config = ScoreConfig {
        forecast,
        marine: Some(marine),
        days: 1,
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let forecast = workspace.path("forecast.json");
    std::fs::create_dir(&forecast).expect("forecast directory");
    let config = ScoreConfig {
        forecast: forecast.clone(),
        marine: None,
        days: 1,
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SCORE_FORECAST);
            assert_eq!(path, forecast);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn report_merges_marine_data(workspace: Workspace) {
    let forecast = workspace.write("forecast.json", FORECAST_JSON);
    let marine = workspace.write("marine.json", MARINE_JSON);
    let snapshot = load_snapshot(&forecast, Some(&marine)).expect("snapshot");

    let report = build_report(&snapshot, &ThresholdScorer, 7).expect("report");

    let current = report.current;
    assert_eq!(current.score.display_score, "4,0");
    assert_eq!(current.tier, ScoreTier::Ideal);
    assert_eq!(current.colour, "#22c55e");
    assert_eq!(current.weather, "Mainly clear");
    assert_eq!(current.sky, SkyCondition::PartlyCloudy);
    assert_eq!(current.sky_icon, "⛅");
    assert_eq!(current.marine.uv_index, "7.3");
    assert_eq!(current.wind_direction, Some("SW"));
    assert_eq!(current.marine.wave_height, "0.3 m");
    assert_eq!(current.marine.wave_period, "5 s");
}

#[rstest]
fn report_falls_back_to_wind_inland(workspace: Workspace) {
    let forecast = workspace.write("forecast.json", FORECAST_JSON);
    let marine = workspace.write("marine.json", MARINE_ERROR_JSON);
    let snapshot = load_snapshot(&forecast, Some(&marine)).expect("snapshot");

    let report = build_report(&snapshot, &ThresholdScorer, 7).expect("report");

    assert_eq!(report.current.score.display_score, "4,5");
    assert_eq!(report.current.score.sea_state, SeaState::Calm);
    assert_eq!(report.current.marine.wave_height, "N/A");
}

#[rstest]
#[case(0, &[])]
#[case(2, &["4,0", "2,5"])]
#[case(7, &["4,0", "2,5", "1,0"])]
fn report_limits_forecast_days(
    workspace: Workspace,
    #[case] limit: usize,
    #[case] expected: &[&str],
) {
    let forecast = workspace.write("forecast.json", FORECAST_JSON);
    let marine = workspace.write("marine.json", MARINE_JSON);
    let snapshot = load_snapshot(&forecast, Some(&marine)).expect("snapshot");

    let report = build_report(&snapshot, &ThresholdScorer, limit).expect("report");

    let scores: Vec<&str> = report
        .days
        .iter()
        .map(|day| day.conditions.score.display_score.as_str())
        .collect();
    assert_eq!(scores, expected);
}

#[rstest]
fn run_score_prints_json_report(workspace: Workspace) {
    let forecast = workspace.write("forecast.json", FORECAST_JSON);
    let args = ScoreArgs {
        forecast: Some(forecast),
        days: Some(1),
        ..ScoreArgs::default()
    };
    let mut stdout: Vec<u8> = Vec::new();

    run_score_with(args, &ThresholdScorer, &mut stdout).expect("score command");

    let output: serde_json::Value =
        serde_json::from_slice(&stdout).expect("output should be JSON");
    assert_eq!(output["current"]["score"]["display_score"], "4,5");
    assert_eq!(output["current"]["tier"], "ideal");
    assert_eq!(output["days"][0]["date"], "2024-07-01");
    assert_eq!(output["days"][0]["sunrise"], "05:36");
    assert_eq!(output["days"].as_array().map(Vec::len), Some(1));
}

#[rstest]
fn run_score_rejects_forecast_error_bodies(workspace: Workspace) {
    let forecast = workspace.write(
        "forecast.json",
        r#"{"error": true, "reason": "Parameter 'latitude' is out of range"}"#,
    );
    let args = ScoreArgs {
        forecast: Some(forecast),
        ..ScoreArgs::default()
    };

    let err =
        run_score_with(args, &ThresholdScorer, &mut Vec::<u8>::new()).expect_err("provider error");
    match err {
        CliError::Normalise(beach_data::NormaliseError::Provider { reason }) => {
            assert!(reason.contains("latitude"));
        }
        other => panic!("expected Normalise, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "days": "a week" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_forecast = workspace.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "forecast": workspace.path("from-file.json").as_str(),
            "days": 3,
        }),
        None,
    );
    composer.push_environment(json!({ "forecast": env_forecast.as_str() }));
    composer.push_cli(json!({ "days": 5 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.forecast, env_forecast);
    assert_eq!(config.days, 5);
}

//! Score command implementation for the beach CLI.

use std::io::Write;

use beach_core::{
    ConditionScorer, MarineSummary, ScoreResult, ScoreTier, SkyCondition, ThresholdScorer,
    WeatherReading, weather_icon, weather_label,
};
use beach_data::{ConditionsSnapshot, DailyOutlook, load_snapshot};
use camino::Utf8PathBuf;
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_SCORE_DAYS, ARG_SCORE_FORECAST, ARG_SCORE_MARINE, CliError, ENV_SCORE_FORECAST,
    require_existing, write_json,
};

/// Forecast days reported when `--days` is not set.
pub(crate) const DEFAULT_FORECAST_DAYS: usize = 7;

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score beach conditions from saved Open-Meteo responses. \
                 The forecast response is required; the marine response is \
                 optional and, when absent or an error body, the sea state \
                 is estimated from wind speed.",
    about = "Score beach conditions from saved forecasts"
)]
#[ortho_config(prefix = "BEACH")]
pub(crate) struct ScoreArgs {
    /// Path to a saved Open-Meteo forecast response.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// Path to a saved Open-Meteo marine response.
    #[arg(long = ARG_SCORE_MARINE, value_name = "path")]
    #[serde(default)]
    pub(crate) marine: Option<Utf8PathBuf>,
    /// Number of forecast days to include in the report.
    #[arg(long = ARG_SCORE_DAYS, value_name = "count")]
    #[serde(default)]
    pub(crate) days: Option<usize>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) forecast: Utf8PathBuf,
    pub(crate) marine: Option<Utf8PathBuf>,
    pub(crate) days: usize,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.forecast, ARG_SCORE_FORECAST)?;
        if let Some(marine) = &self.marine {
            require_existing(marine, ARG_SCORE_MARINE)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let forecast = args.forecast.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_FORECAST,
            env: ENV_SCORE_FORECAST,
        })?;
        Ok(Self {
            forecast,
            marine: args.marine,
            days: args.days.unwrap_or(DEFAULT_FORECAST_DAYS),
        })
    }
}

/// Scored conditions for the current time step and the coming days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) current: ConditionsReport,
    pub(crate) days: Vec<DayReport>,
}

/// A scored reading with the labels a beach card displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ConditionsReport {
    pub(crate) score: ScoreResult,
    pub(crate) tier: ScoreTier,
    pub(crate) colour: &'static str,
    pub(crate) advice: &'static str,
    pub(crate) weather: &'static str,
    pub(crate) sky: SkyCondition,
    pub(crate) sky_icon: &'static str,
    pub(crate) wind_direction: Option<&'static str>,
    pub(crate) marine: MarineSummary,
}

impl ConditionsReport {
    fn new(scorer: &dyn ConditionScorer, reading: &WeatherReading) -> Self {
        let score = scorer.score(reading);
        let tier = score.tier();
        Self {
            tier,
            colour: tier.hex_colour(),
            advice: tier.advice(),
            weather: weather_label(reading.weather_code),
            sky: SkyCondition::from_code(reading.weather_code),
            sky_icon: weather_icon(reading.weather_code),
            wind_direction: None,
            marine: MarineSummary::from_reading(reading),
            score,
        }
    }
}

/// A forecast day with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DayReport {
    #[serde(flatten)]
    pub(crate) outlook: DailyOutlook,
    pub(crate) conditions: ConditionsReport,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &ThresholdScorer, &mut stdout)
}

pub(super) fn run_score_with(
    args: ScoreArgs,
    scorer: &dyn ConditionScorer,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let snapshot = load_snapshot(&config.forecast, config.marine.as_deref())?;
    let report = build_report(&snapshot, scorer, config.days)?;
    info!(
        "scored {} as {} ({:?})",
        config.forecast, report.current.score.display_score, report.current.tier
    );
    write_json(writer, &report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn build_report(
    snapshot: &ConditionsSnapshot,
    scorer: &dyn ConditionScorer,
    limit: usize,
) -> Result<ScoreReport, CliError> {
    let reading = snapshot.current_reading()?;
    let current = ConditionsReport {
        wind_direction: snapshot.current_wind_direction().map(|point| point.as_str()),
        ..ConditionsReport::new(scorer, &reading)
    };
    let outlooks = snapshot.daily_outlooks();
    debug!(
        "scoring {} of {} forecast days",
        limit.min(outlooks.len()),
        outlooks.len()
    );
    let days = outlooks
        .into_iter()
        .take(limit)
        .map(|outlook| DayReport {
            conditions: ConditionsReport::new(scorer, &outlook.reading),
            outlook,
        })
        .collect();
    Ok(ScoreReport { current, days })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

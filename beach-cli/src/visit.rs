//! Visit command implementation for the beach CLI.

use std::io::Write;

use beach_core::{PlaceError, RecentBeaches, RecentVisit};
use beach_data::{load_catalogue, load_history_refreshed, save_history};
use camino::Utf8PathBuf;
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_VISIT_CATALOGUE, ARG_VISIT_HISTORY, ARG_VISIT_ID, ARG_VISIT_LOCATION, ARG_VISIT_NAME, ARG_VISIT_PREVIEW,
    CliError, ENV_VISIT_ID, ENV_VISIT_NAME, write_json,
};

/// History file used when `--history` is not set.
pub(crate) const DEFAULT_HISTORY_PATH: &str = "recent_beaches.json";

/// CLI arguments for the `visit` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Record a visit to a beach in the recent-beach history. \
                 The visit moves to the front, replaces any earlier entry \
                 for the same beach, and the oldest entries are dropped once \
                 the history is full. With a catalogue, stored entries \
                 pick up the catalogue's current names and previews.",
    about = "Record a beach visit"
)]
#[ortho_config(prefix = "BEACH")]
pub(crate) struct VisitArgs {
    /// Stable identifier of the beach.
    #[arg(long = ARG_VISIT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
    /// Display name of the beach.
    #[arg(long = ARG_VISIT_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Human-readable region, e.g. "Sardinia, Italy".
    #[arg(long = ARG_VISIT_LOCATION, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Preview image URL.
    #[arg(long = ARG_VISIT_PREVIEW, value_name = "url")]
    #[serde(default)]
    pub(crate) preview: Option<String>,
    /// Path to the history file.
    #[arg(long = ARG_VISIT_HISTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) history: Option<Utf8PathBuf>,
    /// JSON list of beaches used to refresh stored entries.
    #[arg(long = ARG_VISIT_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl VisitArgs {
    pub(crate) fn into_config(self) -> Result<VisitConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        VisitConfig::try_from(merged)
    }
}

/// Resolved `visit` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisitConfig {
    pub(crate) visit: RecentVisit,
    pub(crate) history: Utf8PathBuf,
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl TryFrom<VisitArgs> for VisitConfig {
    type Error = CliError;

    fn try_from(args: VisitArgs) -> Result<Self, Self::Error> {
        let id = args.id.ok_or(CliError::MissingArgument {
            field: ARG_VISIT_ID,
            env: ENV_VISIT_ID,
        })?;
        if id.trim().is_empty() {
            return Err(CliError::InvalidVisit(PlaceError::EmptyId));
        }
        let name = args.name.ok_or(CliError::MissingArgument {
            field: ARG_VISIT_NAME,
            env: ENV_VISIT_NAME,
        })?;
        Ok(Self {
            visit: RecentVisit {
                id,
                name,
                location: args.location.unwrap_or_default(),
                preview: args.preview,
            },
            history: args
                .history
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_HISTORY_PATH)),
            catalogue: args.catalogue,
        })
    }
}

pub(super) fn run_visit(args: VisitArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_visit_with(args, &mut stdout)
}

pub(super) fn run_visit_with(args: VisitArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let history = record_visit(&config)?;
    write_json(writer, &history)
}

/// Record the configured visit and persist the updated history.
pub(crate) fn record_visit(config: &VisitConfig) -> Result<RecentBeaches, CliError> {
    let catalogue = config
        .catalogue
        .as_deref()
        .map(load_catalogue)
        .transpose()?
        .unwrap_or_default();
    debug!("loaded {} catalogue entries", catalogue.len());
    let history =
        load_history_refreshed(&config.history, &catalogue)?.record(config.visit.clone());
    save_history(&config.history, &history)?;
    info!(
        "recorded visit to {} ({} recent beaches)",
        config.visit.id,
        history.len()
    );
    Ok(history)
}

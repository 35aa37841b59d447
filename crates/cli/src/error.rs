use std::io;

use filespec::FilterError;
use settings::SettingsError;
use thiserror::Error;

/// Failure that ends a `vcfilter` invocation with exit code 1.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Arguments(#[from] clap::Error),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to read paths from standard input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

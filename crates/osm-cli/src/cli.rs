//! CLI argument definitions for the OSM tag cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use osm_output::DEFAULT_COLLECTION;

#[derive(Parser)]
#[command(
    name = "osm-clean",
    version,
    about = "OSM tag cleaner - Normalize OpenStreetMap tags into JSON documents",
    long_about = "Clean the tags of an OpenStreetMap XML export.\n\n\
                  Writes one JSON document per node and way, either as a single\n\
                  JSON array file or into a SQLite-backed document collection.\n\
                  The audit commands report tag anomalies before cleaning."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an OSM XML export and write the records.
    Load(LoadArgs),

    /// Report tag keys and values that need cleaning rules.
    Audit(AuditArgs),

    /// List the normalization rules and correction tables.
    Rules,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the OSM XML export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where records go.
    #[arg(long = "sink", value_enum, default_value = "json")]
    pub sink: SinkArg,

    /// Output path (default: <INPUT> with a .json or .db extension).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Document collection name (store sink only).
    #[arg(long = "collection", value_name = "NAME", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkArg {
    /// One JSON array file.
    Json,
    /// SQLite document store.
    Store,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to the OSM XML export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(subcommand)]
    pub variant: AuditCommand,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum AuditCommand {
    /// Count every plain or namespaced key.
    Keys,

    /// Count every addr:* key.
    AddrKeys,

    /// Group street names by unexpected street type.
    StreetTypes,

    /// Group name spellings by lowercase form.
    Names {
        /// Show every name, not only conflicting capitalizations.
        #[arg(long = "all")]
        all: bool,
    },

    /// Distinct cleaned values of one key.
    ValueSet {
        #[arg(long = "key", value_name = "KEY")]
        key: String,
    },

    /// Frequency of cleaned values of one key.
    ValueTally {
        #[arg(long = "key", value_name = "KEY")]
        key: String,
    },

    /// Count placeholder values (default: null, none, true, false).
    Suspicious {
        #[arg(long = "literal", value_name = "LITERAL")]
        literals: Vec<String>,
    },

    /// Keys whose value equals a literal (case-insensitive).
    KeysWithValue {
        #[arg(long = "literal", value_name = "LITERAL")]
        literal: String,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for the telehealth toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use telehealth_lookup::IndexSource;
use telehealth_model::{
    DEFAULT_DATA_DIR, DEFAULT_IDENTIFIER_COLUMN, DEFAULT_REFERENCE_DIR, DatasetLayout,
    PresenceSentinel,
};

#[derive(Parser)]
#[command(
    name = "telehealth",
    version,
    about = "Disease-symptom lookups over the Kaggle symptom datasets",
    long_about = "Reshape disease-symptom association tables and look up diseases,\n\
                  symptoms, severity and precautions.\n\n\
                  Educational use only. Do not self-medicate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

/// Where the dataset files live.
#[derive(Args, Clone)]
pub struct DatasetArgs {
    /// Dataset directory holding the CSV files.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "TELEHEALTH_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        global = true
    )]
    pub data_dir: PathBuf,

    /// Directory of the listing and reference tables, relative to the data
    /// directory unless absolute.
    #[arg(
        long = "reference-dir",
        value_name = "DIR",
        env = "TELEHEALTH_REFERENCE_DIR",
        default_value = DEFAULT_REFERENCE_DIR,
        global = true
    )]
    pub reference_dir: PathBuf,

    /// File the lookup index is built from.
    #[arg(
        long = "index-source",
        value_enum,
        default_value = "associations",
        global = true
    )]
    pub index_source: IndexSourceArg,

    /// Index file (default: the source's file inside the data directory).
    #[arg(long = "index", value_name = "PATH", global = true)]
    pub index: Option<PathBuf>,

    /// History file (default: patient_history.csv inside the data directory).
    #[arg(long = "history", value_name = "PATH", global = true)]
    pub history: Option<PathBuf>,
}

impl DatasetArgs {
    pub fn layout(&self) -> DatasetLayout {
        DatasetLayout::new(&self.data_dir).with_reference_dir(&self.reference_dir)
    }

    pub fn history_path(&self) -> PathBuf {
        self.history
            .clone()
            .unwrap_or_else(|| self.layout().history_path())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a wide association table into a long disease/symptom table.
    Reshape(ReshapeArgs),

    /// List the symptoms of a disease.
    Symptoms(SymptomsArgs),

    /// List diseases matching any of the given symptoms.
    Diseases(DiseasesArgs),

    /// Search disease names (case-insensitive substring).
    Search(SearchArgs),

    /// Show symptoms with severity, description and precautions of a disease.
    Profile(ProfileArgs),

    /// Inspect the lookup history.
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Parser)]
pub struct ReshapeArgs {
    /// Wide CSV file (default: Disease_Symptom_Associations.csv in the data directory).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (default: preprocessed_dataset.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the disease identifier column.
    #[arg(long = "id-column", value_name = "NAME", default_value = DEFAULT_IDENTIFIER_COLUMN)]
    pub id_column: String,

    /// Cell value meaning "present": an integer, 'truthy', or 'text:<value>'.
    #[arg(long = "presence", value_name = "SENTINEL", default_value = "1")]
    pub presence: PresenceSentinel,

    /// Reshape and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SymptomsArgs {
    /// Exact disease name.
    #[arg(value_name = "DISEASE")]
    pub disease: String,
}

#[derive(Parser)]
pub struct DiseasesArgs {
    /// One or more exact symptom names.
    #[arg(value_name = "SYMPTOM", required = true, num_args = 1..)]
    pub symptoms: Vec<String>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Part of a disease name.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Exact disease name.
    #[arg(value_name = "DISEASE")]
    pub disease: String,

    /// Append this lookup to the history file.
    #[arg(long = "save")]
    pub save: bool,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Print every saved lookup.
    List,

    /// Print lookup counts per disease.
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IndexSourceArg {
    /// Long table written by `reshape`.
    Associations,
    /// Listing dataset with symptom names in its cells.
    Listing,
}

impl From<IndexSourceArg> for IndexSource {
    fn from(value: IndexSourceArg) -> Self {
        match value {
            IndexSourceArg::Associations => IndexSource::Associations,
            IndexSourceArg::Listing => IndexSource::Listing,
        }
    }
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

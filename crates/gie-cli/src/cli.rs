//! CLI argument definitions for the GIE client.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gie_catalog::ApiFamily;
use gie_client::{QueryWindow, parse_date};

#[derive(Parser)]
#[command(
    name = "gie",
    version,
    about = "GIE transparency platform client - AGSI gas storage and ALSI LNG data",
    long_about = "Query the GIE AGSI (gas storage) and ALSI (LNG terminal) APIs.\n\n\
                  Countries, companies and facilities may be given by catalog key\n\
                  (e.g. dunkerque) or by code (e.g. 21W0000000000451)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API key sent in the x-key header (overrides the config file).
    #[arg(
        long = "api-key",
        env = "GIE_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// TOML file with client settings (api_key, agsi_root, alsi_root).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

#[derive(Subcommand)]
pub enum Command {
    /// List a built-in catalog.
    Catalog(CatalogArgs),

    /// Resolve an identifier and show the query parameters it maps to.
    Resolve(ResolveArgs),

    /// Fetch the EIC listing of all companies and facilities.
    Listing(ListingArgs),

    /// Fetch news items.
    News(NewsArgs),

    /// Fetch storage data for a country, or aggregated for all countries.
    Storage(StorageArgs),

    /// Fetch unavailability reports.
    Unavailability(StorageArgs),

    /// Fetch storage data for a company.
    Company(EntityArgs),

    /// Fetch storage data for a facility.
    Facility(EntityArgs),
}

impl Command {
    /// Returns true if the command needs the network (and an API key).
    pub fn is_query(&self) -> bool {
        !matches!(self, Self::Catalog(_) | Self::Resolve(_))
    }
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog to list.
    #[arg(value_enum)]
    pub kind: CatalogKind,

    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Catalog to search.
    #[arg(value_enum)]
    pub kind: CatalogKind,

    /// Catalog key or code.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,
}

#[derive(Args)]
pub struct ListingArgs {
    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct NewsArgs {
    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,

    /// Single news item to fetch.
    #[arg(long = "item", value_name = "ITEM")]
    pub item: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct StorageArgs {
    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,

    /// Country key or code (all countries when omitted).
    #[arg(long = "country", value_name = "COUNTRY")]
    pub country: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct EntityArgs {
    /// Catalog key or code.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// API family.
    #[arg(long = "family", value_enum, default_value = "agsi")]
    pub family: FamilyArg,

    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Default)]
pub struct WindowArgs {
    /// First gas day (YYYY-MM-DD).
    #[arg(long = "start", value_name = "DATE", value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Last gas day (YYYY-MM-DD).
    #[arg(long = "end", value_name = "DATE", value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Single gas day to report (YYYY-MM-DD).
    #[arg(long = "date", value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Page size.
    #[arg(long = "size", value_name = "N")]
    pub size: Option<u32>,
}

impl WindowArgs {
    pub fn to_window(&self) -> QueryWindow {
        QueryWindow {
            start: self.start,
            end: self.end,
            date: self.date,
            size: self.size,
        }
    }
}

#[derive(Args, Default)]
pub struct OutputArgs {
    /// Print the raw JSON payload instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI API family choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Agsi,
    Alsi,
}

impl From<FamilyArg> for ApiFamily {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::Agsi => ApiFamily::Agsi,
            FamilyArg::Alsi => ApiFamily::Alsi,
        }
    }
}

/// CLI catalog choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Countries,
    Companies,
    Facilities,
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

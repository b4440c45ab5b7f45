use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_PATH;

/// Fetch and print the robotics club site datasets
#[derive(Parser, Debug)]
#[command(name = "clubsite")]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// RON config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the store project id from the config file
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Override the presentation cache directory
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List events
    Events {
        /// Only the featured events shown on the home page
        #[arg(long)]
        featured: bool,
    },
    /// Show one governing panel page, e.g. `spring-2024` or `hall-of-fame`
    Panel { slug: String },
    /// Show the hall of fame
    HallOfFame,
    /// Show the contact page
    Contacts,
    /// List sponsors
    Sponsors,
    /// List collaborations
    Collaborations,
    /// List partner club logos
    Partners {
        /// Print the doubled scrolling track instead of the plain list
        #[arg(long)]
        track: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

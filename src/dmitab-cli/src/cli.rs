//! CLI argument definitions for dmitab

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dmitab")]
#[command(about = "Structured hardware inventory from dmidecode", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a dmidecode report and print its records
    #[command(visible_alias = "d")]
    Dump {
        /// Read the report from a file instead of running dmidecode
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Run dmidecode through sudo
        #[arg(long)]
        sudo: bool,

        /// Only print one category, by code (e.g. 0) or name (e.g. BIOS)
        #[arg(short = 't', long = "type")]
        type_selector: Option<String>,

        /// Print records as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List the DMI type catalog
    #[command(visible_alias = "t")]
    Types,
}

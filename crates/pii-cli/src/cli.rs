use clap::{Parser, Subcommand};
use pii_core::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pii")]
#[command(about = "Detect and redact personal data in text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "PII_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report which lines of a file contain PII
    Check {
        /// Input file, one text per line
        input: PathBuf,

        /// Restrict to these categories (repeatable; default from config)
        #[arg(long = "category", short = 'c')]
        categories: Vec<Category>,

        /// Print one JSON object per flagged line
        #[arg(long)]
        json: bool,
    },

    /// Write an anonymized copy of a file
    Scrub {
        /// Input file, one text per line
        input: PathBuf,

        /// Output file (default: input path plus the configured suffix)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Restrict to these categories (repeatable; default from config)
        #[arg(long = "category", short = 'c')]
        categories: Vec<Category>,
    },

    /// List categories and their placeholders
    Categories,
}

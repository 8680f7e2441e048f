use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::engine::ranker::DEFAULT_TOP_N;

/// Rank resumes against job descriptions by TF-IDF cosine similarity.
#[derive(Debug, Clone, Parser)]
#[command(name = "screener", version, about)]
pub struct Cli {
    /// Folder of resumes (PDF, DOCX, TXT); searched recursively.
    #[arg(long, env = "SCREENER_RESUMES_DIR", default_value = "resumes")]
    pub resumes_dir: PathBuf,

    /// Folder of job descriptions; top level only.
    #[arg(long, env = "SCREENER_JOBS_DIR", default_value = "job_descriptions")]
    pub jobs_dir: PathBuf,

    /// Where the CSV, spreadsheet and run summary are written.
    #[arg(long, env = "SCREENER_OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Resumes shown per job on the console.
    #[arg(long, env = "SCREENER_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Skip the .xlsx report.
    #[arg(long)]
    pub no_xlsx: bool,
}

/// Runtime configuration: `.env`, then environment, then command-line flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub resumes_dir: PathBuf,
    pub jobs_dir: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub write_xlsx: bool,
    pub rust_log: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(cli.top_n >= 1, "--top-n must be at least 1");

        Ok(Config {
            resumes_dir: cli.resumes_dir,
            jobs_dir: cli.jobs_dir,
            output_dir: cli.output_dir,
            top_n: cli.top_n,
            write_xlsx: !cli.no_xlsx,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

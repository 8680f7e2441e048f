mod config;
mod engine;
mod errors;
mod loader;
mod models;
mod report;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::engine::pipeline::run_screening;
use crate::loader::{load_jobs, load_resumes};
use crate::models::Document;
use crate::report::{print_top_n, write_reports, RunSummary};

fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let job_load = load_jobs(&config.jobs_dir).context("Failed to load job descriptions")?;
    let resume_load = load_resumes(&config.resumes_dir).context("Failed to load resumes")?;

    let jobs: Vec<Document> = job_load.documents.iter().map(Document::from).collect();
    let resumes: Vec<Document> = resume_load.documents.iter().map(Document::from).collect();

    let run = run_screening(&jobs, &resumes)?;

    print_top_n(&mut std::io::stdout().lock(), &run, config.top_n)
        .context("Failed to print rankings")?;

    let mut load_skips = job_load.skipped;
    load_skips.extend(resume_load.skipped);
    let summary = RunSummary::new(&run, jobs.len(), resumes.len(), config.top_n, load_skips);

    let paths = write_reports(&config.output_dir, &run, &summary, config.write_xlsx)
        .context("Failed to write reports")?;

    info!(
        "Done: {} jobs ranked, {} rows in {}",
        summary.jobs_ranked,
        summary.rows_written,
        paths.csv.display()
    );
    if let Some(xlsx) = &paths.xlsx {
        info!("Spreadsheet: {}", xlsx.display());
    }
    info!("Run summary: {}", paths.summary.display());

    Ok(())
}

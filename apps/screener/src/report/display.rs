//! Console top-N view. Display only; the persisted reports always carry every row.

use std::io::Write;

use crate::engine::pipeline::ScreeningRun;
use crate::engine::ranker::top_n;

pub fn print_top_n<W: Write>(out: &mut W, run: &ScreeningRun, n: usize) -> std::io::Result<()> {
    for job in &run.jobs {
        writeln!(out, "Top {} resumes for {}", n.min(job.ranked.len()), job.job_id)?;
        writeln!(out, "{:>4}  {:>8}  resume", "rank", "match")?;
        for row in top_n(&job.rows, n) {
            writeln!(
                out,
                "{:>4}  {:>7.2}%  {}",
                row.rank, row.percentage, row.resume_id
            )?;
        }
        writeln!(out)?;
    }

    for skipped in &run.skipped_jobs {
        writeln!(out, "Skipped {}: {}", skipped.job_id, skipped.reason)?;
    }
    Ok(())
}

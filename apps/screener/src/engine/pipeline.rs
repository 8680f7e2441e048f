//! Screening pipeline — runs the engine once per job and collects the results.
//!
//! Flow per job: CorpusBuilder::build → Vectorizer::fit_transform →
//!       similarity::score → ranker::rank → emitter::emit.
//!
//! Jobs are independent. A job that fails (no usable resumes, no usable job
//! text) is logged and recorded as skipped; the remaining jobs still run.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::engine::corpus::CorpusBuilder;
use crate::engine::emitter::emit;
use crate::engine::ranker::rank;
use crate::engine::similarity::score;
use crate::engine::vectorizer::Vectorizer;
use crate::errors::ScreenerError;
use crate::models::{Document, RankedResult, ResultRow, SkippedDocument, SkippedJob};

const EMPTY_TEXT_REASON: &str = "no text left after normalization";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Everything produced for one job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub job_id: String,
    /// Full ranking, best first.
    pub ranked: Vec<RankedResult>,
    /// One row per ranked resume, same order as `ranked`.
    pub rows: Vec<ResultRow>,
    /// Resumes left out of this job's corpus for empty text.
    pub excluded: Vec<String>,
}

/// Result of a full run across all jobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningRun {
    pub jobs: Vec<JobReport>,
    pub skipped_jobs: Vec<SkippedJob>,
    /// Documents that never entered a corpus, each listed once.
    pub skipped_documents: Vec<SkippedDocument>,
}

impl ScreeningRun {
    /// All rows, job order first, then rank order.
    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> + '_ {
        self.jobs.iter().flat_map(|job| job.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.jobs.iter().map(|job| job.rows.len()).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores and ranks every resume against one job.
///
/// Errors with `EmptyCorpus` / `EmptyJobText`; see [`CorpusBuilder::build`].
pub fn screen_job(job: &Document, resumes: &[Document]) -> Result<JobReport, ScreenerError> {
    let corpus = CorpusBuilder::build(job, resumes)?;
    let vectors = Vectorizer::fit_transform(&corpus);

    let (job_vector, resume_vectors) = vectors
        .split_first()
        .ok_or_else(|| ScreenerError::EmptyCorpus {
            job_id: job.id().to_string(),
        })?;

    debug!(
        "Job '{}' ({} chars): {} resumes, vocabulary of {} terms",
        corpus.job().id(),
        corpus.job().text().len(),
        corpus.resumes().len(),
        job_vector.dimension()
    );

    let scores = corpus
        .resumes()
        .iter()
        .zip(resume_vectors)
        .map(|(resume, vector)| (resume.id(), score(job_vector, vector)));
    let ranked = rank(scores);
    let rows = ranked.iter().map(|r| emit(job.id(), r)).collect();

    Ok(JobReport {
        job_id: job.id().to_string(),
        ranked,
        rows,
        excluded: corpus.excluded().iter().map(|id| id.to_string()).collect(),
    })
}

/// Screens every job against the full resume pool.
///
/// Fails only when there is nothing to compute: no jobs, or no resumes.
pub fn run_screening(
    jobs: &[Document],
    resumes: &[Document],
) -> Result<ScreeningRun, ScreenerError> {
    if jobs.is_empty() {
        return Err(ScreenerError::EmptyInput(
            "no job descriptions were loaded".to_string(),
        ));
    }
    if resumes.is_empty() {
        return Err(ScreenerError::EmptyInput(
            "no resumes were loaded".to_string(),
        ));
    }

    let mut run = ScreeningRun::default();

    let mut seen = BTreeSet::new();
    for resume in resumes.iter().filter(|r| r.is_empty()) {
        if seen.insert(resume.id()) {
            warn!("Skipping resume '{}': {}", resume.id(), EMPTY_TEXT_REASON);
            run.skipped_documents.push(SkippedDocument {
                id: resume.id().to_string(),
                reason: EMPTY_TEXT_REASON.to_string(),
            });
        }
    }

    for job in jobs {
        match screen_job(job, resumes) {
            Ok(report) => {
                info!(
                    "Ranked {} resumes for '{}'",
                    report.ranked.len(),
                    report.job_id
                );
                run.jobs.push(report);
            }
            Err(e) if e.is_job_scoped() => {
                warn!("Skipping job '{}': {e}", job.id());
                run.skipped_jobs.push(SkippedJob {
                    job_id: job.id().to_string(),
                    code: e.code().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Screened {} of {} jobs, {} rows",
        run.jobs.len(),
        jobs.len(),
        run.row_count()
    );

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Band;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text)
    }

    #[test]
    fn test_python_developer_scenario() {
        let job = doc("python.txt", "python developer needed");
        let resumes = vec![
            doc("A.pdf", "expert python developer"),
            doc("B.pdf", "java developer"),
            doc("C.pdf", ""),
        ];

        let report = screen_job(&job, &resumes).unwrap();
        assert_eq!(report.excluded, vec!["C.pdf"]);
        assert_eq!(report.ranked.len(), 2);
        assert_eq!(report.ranked[0].resume_id, "A.pdf");
        assert_eq!(report.ranked[0].rank, 1);
        assert_eq!(report.ranked[1].resume_id, "B.pdf");
        assert_eq!(report.ranked[1].rank, 2);
        assert!(report.ranked[0].score > report.ranked[1].score);
        assert!(report.ranked[1].score > 0.0);
    }

    #[test]
    fn test_identical_resumes_ordered_by_id() {
        let job = doc("job.txt", "rust systems engineer");
        let resumes = vec![
            doc("zed.pdf", "rust engineer with systems background"),
            doc("amy.pdf", "rust engineer with systems background"),
            doc("kim.pdf", "accountant"),
        ];

        let report = screen_job(&job, &resumes).unwrap();
        assert_eq!(report.ranked[0].score, report.ranked[1].score);
        assert_eq!(report.ranked[0].resume_id, "amy.pdf");
        assert_eq!(report.ranked[1].resume_id, "zed.pdf");
        assert_eq!(report.ranked[2].resume_id, "kim.pdf");
    }

    #[test]
    fn test_rows_mirror_ranking() {
        let job = doc("job.txt", "data analyst sql");
        let resumes: Vec<Document> = (1..=7)
            .map(|i| doc(&format!("r{i}.pdf"), &"sql ".repeat(i)))
            .collect();

        let report = screen_job(&job, &resumes).unwrap();
        let ranks: Vec<usize> = report.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
        assert!(report.rows.iter().all(|r| r.job_id == "job.txt"));
        assert_eq!(report.rows[1].band, Band::Top);
        assert_eq!(report.rows[2].band, Band::Mid);
        assert_eq!(report.rows[5].band, Band::Low);
    }

    #[test]
    fn test_load_order_does_not_change_ranking() {
        let job = doc("job.txt", "cloud devops kubernetes terraform");
        let forward = vec![
            doc("a.pdf", "kubernetes operator"),
            doc("b.pdf", "terraform cloud"),
            doc("c.pdf", "kubernetes operator"),
            doc("d.pdf", "graphic design"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let r1 = screen_job(&job, &forward).unwrap();
        let r2 = screen_job(&job, &backward).unwrap();
        assert_eq!(r1.ranked, r2.ranked);
        assert_eq!(r1.rows, r2.rows);
    }

    #[test]
    fn test_job_without_resumes_skipped_others_continue() {
        let jobs = vec![doc("empty.txt", "python"), doc("rust.txt", "rust")];
        let err = screen_job(&jobs[0], &[]).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyCorpus { .. }));

        // An unusable job in the middle of a run does not stop the rest.
        let jobs = vec![
            doc("scan.pdf", "   "),
            doc("rust.txt", "rust developer"),
        ];
        let resumes = vec![doc("a.pdf", "rust developer"), doc("b.pdf", "go developer")];
        let run = run_screening(&jobs, &resumes).unwrap();

        assert_eq!(run.jobs.len(), 1);
        assert_eq!(run.jobs[0].job_id, "rust.txt");
        assert_eq!(run.skipped_jobs.len(), 1);
        assert_eq!(run.skipped_jobs[0].job_id, "scan.pdf");
        assert_eq!(run.skipped_jobs[0].code, "EMPTY_JOB_TEXT");
        assert!(run.rows().all(|r| r.job_id == "rust.txt"));
    }

    #[test]
    fn test_all_resumes_empty_skips_every_job() {
        let jobs = vec![doc("a.txt", "rust"), doc("b.txt", "go")];
        let resumes = vec![doc("x.pdf", ""), doc("y.pdf", "...")];
        let run = run_screening(&jobs, &resumes).unwrap();

        assert!(run.jobs.is_empty());
        assert_eq!(run.row_count(), 0);
        assert_eq!(run.skipped_jobs.len(), 2);
        assert!(run.skipped_jobs.iter().all(|s| s.code == "EMPTY_CORPUS"));
        assert_eq!(run.skipped_documents.len(), 2);
    }

    #[test]
    fn test_no_jobs_or_no_resumes_is_fatal() {
        let resumes = vec![doc("a.pdf", "rust")];
        let err = run_screening(&[], &resumes).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyInput(_)));

        let jobs = vec![doc("job.txt", "rust")];
        let err = run_screening(&jobs, &[]).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyInput(_)));
    }

    #[test]
    fn test_empty_resume_reported_once_across_jobs() {
        let jobs = vec![doc("a.txt", "rust"), doc("b.txt", "go")];
        let resumes = vec![doc("r.pdf", "rust go"), doc("blank.pdf", "")];
        let run = run_screening(&jobs, &resumes).unwrap();

        assert_eq!(run.jobs.len(), 2);
        assert_eq!(run.skipped_documents.len(), 1);
        assert_eq!(run.skipped_documents[0].id, "blank.pdf");
        assert!(run.jobs.iter().all(|j| j.excluded == vec!["blank.pdf"]));
    }

    #[test]
    fn test_rerun_is_identical() {
        let jobs = vec![
            doc("backend.txt", "rust postgres backend services"),
            doc("frontend.txt", "react typescript css"),
        ];
        let resumes = vec![
            doc("a.pdf", "backend engineer rust and postgres"),
            doc("b.pdf", "react developer typescript"),
            doc("c.pdf", "fullstack rust react"),
        ];
        let first = run_screening(&jobs, &resumes).unwrap();
        let second = run_screening(&jobs, &resumes).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.row_count(), 6);
    }
}

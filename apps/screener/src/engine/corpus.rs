//! Corpus Builder — assembles `{job, resume_1 … resume_n}` for a single job.

use crate::errors::ScreenerError;
use crate::models::Document;

/// The document set one TF-IDF model is fitted over.
///
/// Element 0 is always the job; resumes follow in insertion order. Built fresh
/// for every job so no vocabulary survives from one job to the next.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    job: &'a Document,
    resumes: Vec<&'a Document>,
    excluded: Vec<&'a str>,
}

impl<'a> Corpus<'a> {
    pub fn job(&self) -> &'a Document {
        self.job
    }

    pub fn resumes(&self) -> &[&'a Document] {
        &self.resumes
    }

    /// Ids of resumes dropped because nothing survived normalization.
    pub fn excluded(&self) -> &[&'a str] {
        &self.excluded
    }

    /// Job first, then resumes.
    pub fn documents(&self) -> impl Iterator<Item = &'a Document> + '_ {
        std::iter::once(self.job).chain(self.resumes.iter().copied())
    }

    /// N in the IDF formula: job plus retained resumes.
    pub fn size(&self) -> usize {
        self.resumes.len() + 1
    }
}

pub struct CorpusBuilder;

impl CorpusBuilder {
    /// Builds the corpus for `job`.
    ///
    /// Errors:
    /// - `EmptyJobText` when the job has no tokens
    /// - `EmptyCorpus` when `resumes` is empty, or every resume is empty after normalization
    pub fn build<'a>(
        job: &'a Document,
        resumes: &'a [Document],
    ) -> Result<Corpus<'a>, ScreenerError> {
        if job.is_empty() {
            return Err(ScreenerError::EmptyJobText {
                job_id: job.id().to_string(),
            });
        }
        if resumes.is_empty() {
            return Err(ScreenerError::EmptyCorpus {
                job_id: job.id().to_string(),
            });
        }

        let (retained, empty): (Vec<&Document>, Vec<&Document>) =
            resumes.iter().partition(|resume| !resume.is_empty());

        if retained.is_empty() {
            return Err(ScreenerError::EmptyCorpus {
                job_id: job.id().to_string(),
            });
        }

        Ok(Corpus {
            job,
            resumes: retained,
            excluded: empty.into_iter().map(Document::id).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text)
    }

    #[test]
    fn test_job_is_first_and_order_preserved() {
        let job = doc("job.txt", "python developer");
        let resumes = vec![doc("b.pdf", "java"), doc("a.pdf", "python"), doc("c.pdf", "go")];

        let corpus = CorpusBuilder::build(&job, &resumes).unwrap();
        let ids: Vec<&str> = corpus.documents().map(Document::id).collect();
        assert_eq!(ids, vec!["job.txt", "b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(corpus.size(), 4);
    }

    #[test]
    fn test_empty_resume_excluded_and_reported() {
        let job = doc("job.txt", "python developer needed");
        let resumes = vec![
            doc("A.pdf", "expert python developer"),
            doc("B.pdf", "java developer"),
            doc("C.pdf", ""),
        ];

        let corpus = CorpusBuilder::build(&job, &resumes).unwrap();
        assert_eq!(corpus.resumes().len(), 2);
        assert_eq!(corpus.excluded(), &["C.pdf"]);
        assert!(corpus.documents().all(|d| !d.is_empty()));
    }

    #[test]
    fn test_no_resumes_is_empty_corpus() {
        let job = doc("job.txt", "python");
        let err = CorpusBuilder::build(&job, &[]).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyCorpus { ref job_id } if job_id == "job.txt"));
    }

    #[test]
    fn test_only_empty_resumes_is_empty_corpus() {
        let job = doc("job.txt", "python");
        let resumes = vec![doc("a.pdf", "   "), doc("b.pdf", "***")];
        let err = CorpusBuilder::build(&job, &resumes).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyCorpus { .. }));
    }

    #[test]
    fn test_empty_job_text_rejected() {
        let job = doc("scan.pdf", "\n\n");
        let resumes = vec![doc("a.pdf", "python")];
        let err = CorpusBuilder::build(&job, &resumes).unwrap_err();
        assert!(matches!(err, ScreenerError::EmptyJobText { .. }));
    }
}

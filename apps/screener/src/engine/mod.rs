// Ranking engine: normalize → build corpus → fit TF-IDF → score → rank → emit.
// Pure functions over in-memory documents. No I/O, no state shared between jobs.

pub mod corpus;
pub mod emitter;
pub mod normalizer;
pub mod pipeline;
pub mod ranker;
pub mod similarity;
pub mod vectorizer;

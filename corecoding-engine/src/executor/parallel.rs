//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{classify_sentence, ExecutionMode, Executor, IndexedSentence, SentenceReport},
};
use corecoding_core::ClauseClassifier;
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Sentences are independent, so each one is classified on its own worker;
/// `collect` on an indexed parallel iterator keeps document order.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor on the global pool, or a dedicated pool of `threads`
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| {
                        EngineError::ParallelError(format!("Failed to create thread pool: {e}"))
                    })?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    fn process_parallel(
        batch: &[IndexedSentence],
        classifier: &ClauseClassifier,
    ) -> Vec<SentenceReport> {
        batch
            .par_iter()
            .map(|item| classify_sentence(item.index, &item.sentence, classifier))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn process(
        &self,
        batch: &[IndexedSentence],
        classifier: &ClauseClassifier,
    ) -> Result<Vec<SentenceReport>> {
        Ok(match &self.pool {
            Some(pool) => pool.install(|| Self::process_parallel(batch, classifier)),
            None => Self::process_parallel(batch, classifier),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

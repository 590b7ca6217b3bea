//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{classify_sentence, ExecutionMode, Executor, IndexedSentence, SentenceReport},
};
use corecoding_core::ClauseClassifier;

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process(
        &self,
        batch: &[IndexedSentence],
        classifier: &ClauseClassifier,
    ) -> Result<Vec<SentenceReport>> {
        Ok(batch
            .iter()
            .map(|item| classify_sentence(item.index, &item.sentence, classifier))
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

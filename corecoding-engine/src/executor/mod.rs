//! Execution strategies for sentence batches

use corecoding_core::{ClauseClassifier, Report, Sentence, TreeNode};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

use crate::error::Result;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Choose per batch based on its size
    Adaptive,
}

/// A sentence together with its position in the document
#[derive(Debug, Clone)]
pub struct IndexedSentence {
    /// 0-based position among the sentences of the document
    pub index: usize,
    /// The sentence itself
    pub sentence: Sentence,
}

/// Report line for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
    /// Position of the clause head
    pub ord: usize,
    /// The report line
    pub report: Report,
}

/// All report lines of one sentence, in node order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceReport {
    /// 0-based position among the sentences of the document
    pub index: usize,
    /// Sentence identifier, if the input provided one
    pub sent_id: Option<String>,
    /// Number of nodes visited
    pub nodes: usize,
    /// Number of nodes that head a clause
    pub clause_heads: usize,
    /// Report lines
    pub reports: Vec<NodeReport>,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Classify every node of every sentence, keeping input order
    fn process(
        &self,
        batch: &[IndexedSentence],
        classifier: &ClauseClassifier,
    ) -> Result<Vec<SentenceReport>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Run the classifier over each node of `sentence` in ascending `ord`
pub fn classify_sentence(
    index: usize,
    sentence: &Sentence,
    classifier: &ClauseClassifier,
) -> SentenceReport {
    let mut reports = Vec::new();
    let mut clause_heads = 0;

    for node in sentence.nodes() {
        if !ClauseClassifier::is_clause_head(&node) {
            continue;
        }
        clause_heads += 1;
        reports.extend(
            classifier
                .classify(&node)
                .into_iter()
                .map(|report| NodeReport {
                    ord: node.ord(),
                    report,
                }),
        );
    }

    SentenceReport {
        index,
        sent_id: sentence.sent_id().map(str::to_string),
        nodes: sentence.len(),
        clause_heads,
        reports,
    }
}

/// Automatically select execution mode based on batch size
pub fn auto_select(batch_len: usize, threshold: usize) -> ExecutionMode {
    if batch_len < 2 || batch_len < threshold {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

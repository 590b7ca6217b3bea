//! Document-level driver for the clause classifier

use crate::{
    config::EngineConfig,
    conllu::ConlluReader,
    error::{EngineError, Result},
    executor::{
        auto_select, classify_sentence, ExecutionMode, Executor, IndexedSentence,
        SentenceReport, SequentialExecutor,
    },
    input::Input,
};
use corecoding_core::{ClassifierConfig, ClauseClassifier, Sentence};
use std::io::BufRead;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Counters for one processing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Sentences classified
    pub sentences: usize,
    /// Sentences skipped because they failed to parse or validate
    pub skipped_sentences: usize,
    /// Nodes visited
    pub nodes: usize,
    /// Nodes heading a clause
    pub clause_heads: usize,
    /// Report lines handed to the sink
    pub lines: usize,
    /// Wall-clock time
    pub elapsed: Duration,
}

impl ProcessingStats {
    /// Add the counters of another run
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.sentences += other.sentences;
        self.skipped_sentences += other.skipped_sentences;
        self.nodes += other.nodes;
        self.clause_heads += other.clause_heads;
        self.lines += other.lines;
        self.elapsed += other.elapsed;
    }

    fn record(&mut self, report: &SentenceReport) {
        self.sentences += 1;
        self.nodes += report.nodes;
        self.clause_heads += report.clause_heads;
        self.lines += report.reports.len();
    }
}

/// Reads treebanks and classifies every node of every sentence
///
/// Sentences are read in batches; each batch is classified sequentially or
/// in parallel and handed to the sink in document order.
pub struct CorpusProcessor {
    classifier: ClauseClassifier,
    config: EngineConfig,
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
}

impl std::fmt::Debug for CorpusProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusProcessor")
            .field("classifier", self.classifier.config())
            .field("config", &self.config)
            .finish()
    }
}

impl CorpusProcessor {
    /// Create a processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClassifierConfig::default(), EngineConfig::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(classifier: ClassifierConfig, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let classifier = ClauseClassifier::new(classifier)?;

        Ok(Self {
            classifier,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads)?,
            sequential_executor: SequentialExecutor,
            config,
        })
    }

    /// The classifier applied to each node
    pub fn classifier(&self) -> &ClauseClassifier {
        &self.classifier
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify every node of a single sentence
    pub fn process_sentence(&self, sentence: &Sentence) -> SentenceReport {
        classify_sentence(0, sentence, &self.classifier)
    }

    /// Process an input, passing each sentence's reports to `sink`
    pub fn process<F>(&self, input: Input, sink: F) -> Result<ProcessingStats>
    where
        F: FnMut(&SentenceReport) -> std::io::Result<()>,
    {
        let reader = input.into_reader()?;
        self.process_reader(reader, sink)
    }

    /// Process CoNLL-U text and collect every report
    pub fn process_text(&self, text: &str) -> Result<(Vec<SentenceReport>, ProcessingStats)> {
        let mut reports = Vec::new();
        let stats = self.process_reader(text.as_bytes(), |report| {
            reports.push(report.clone());
            Ok(())
        })?;
        Ok((reports, stats))
    }

    /// Process a CoNLL-U stream, passing each sentence's reports to `sink`
    ///
    /// Sentences that fail to decode, parse or validate are logged and
    /// skipped. I/O errors abort the run once every sentence read before
    /// them has reached the sink; sink failures abort it immediately.
    pub fn process_reader<R, F>(&self, reader: R, mut sink: F) -> Result<ProcessingStats>
    where
        R: BufRead,
        F: FnMut(&SentenceReport) -> std::io::Result<()>,
    {
        let start = Instant::now();
        let mut stats = ProcessingStats::default();
        let mut batch = Vec::with_capacity(self.config.batch_size);
        let mut index = 0;

        let mut sentences = ConlluReader::new(reader);
        while let Some(result) = sentences.next() {
            match result {
                Ok(sentence) => {
                    batch.push(IndexedSentence { index, sentence });
                    if batch.len() >= self.config.batch_size {
                        self.flush(&mut batch, &mut stats, &mut sink)?;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!(
                        "skipping sentence {} (line {}): {}",
                        index + 1,
                        sentences.line_number(),
                        e
                    );
                    stats.skipped_sentences += 1;
                }
                Err(e) => {
                    self.flush(&mut batch, &mut stats, &mut sink)?;
                    return Err(e);
                }
            }
            index += 1;
        }
        self.flush(&mut batch, &mut stats, &mut sink)?;

        stats.elapsed = start.elapsed();
        log::debug!(
            "processed {} sentences ({} skipped), {} clause heads, {} lines in {:?}",
            stats.sentences,
            stats.skipped_sentences,
            stats.clause_heads,
            stats.lines,
            stats.elapsed
        );
        Ok(stats)
    }

    /// Select the execution mode for a batch of `batch_len` sentences
    pub fn select_mode(&self, batch_len: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(batch_len, self.config.parallel_threshold),
            mode => mode,
        }
    }

    fn flush<F>(
        &self,
        batch: &mut Vec<IndexedSentence>,
        stats: &mut ProcessingStats,
        sink: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&SentenceReport) -> std::io::Result<()>,
    {
        if batch.is_empty() {
            return Ok(());
        }

        let executor = self.executor_for(self.select_mode(batch.len()));
        log::trace!(
            "classifying {} sentences with {:?} executor",
            batch.len(),
            executor.mode()
        );

        for report in executor.process(batch, &self.classifier)? {
            stats.record(&report);
            sink(&report).map_err(EngineError::from)?;
        }
        batch.clear();
        Ok(())
    }

    fn executor_for(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => &self.parallel_executor,
            _ => &self.sequential_executor,
        }
    }
}

/// Builder for [`CorpusProcessor`]
#[derive(Debug, Default)]
pub struct CorpusProcessorBuilder {
    classifier: ClassifierConfig,
    config: EngineConfig,
}

impl CorpusProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classifier configuration
    pub fn classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in sentences
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.parallel_threshold = sentences;
        self
    }

    /// Set the batch size in sentences
    pub fn batch_size(mut self, sentences: usize) -> Self {
        self.config.batch_size = sentences;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<CorpusProcessor> {
        CorpusProcessor::with_config(self.classifier, self.config)
    }
}

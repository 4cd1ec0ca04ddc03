use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

use crate::article::ArticleRecord;
use crate::batch::FailureCounter;
use crate::config::ExtractorConfig;
use crate::entities::Entity;
use crate::extractor::{ExtractError, Extraction, Strategy};

/// An article whose extraction returned an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleError {
    pub article: String,
    pub error: String,
    pub retryable: bool,
}

/// Outcome of one batch, entities in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub articles: usize,
    pub entities: Vec<Entity>,
    /// Articles that produced no season or episode data.
    pub failed: usize,
    pub errors: Vec<ArticleError>,
}

impl BatchReport {
    /// Entities grouped by destination index, ready for a bulk writer.
    pub fn by_index<'a>(&'a self, config: &'a ExtractorConfig) -> BTreeMap<&'a str, Vec<&'a Entity>> {
        let mut grouped: BTreeMap<&str, Vec<&Entity>> = BTreeMap::new();
        for entity in &self.entities {
            grouped
                .entry(config.index_for(entity.kind()))
                .or_default()
                .push(entity);
        }
        grouped
    }
}

/// Runs a strategy over many articles on the blocking pool.
pub struct BatchExtractor {
    strategy: Arc<dyn Strategy>,
    concurrency: usize,
    failures: Arc<FailureCounter>,
}

impl BatchExtractor {
    pub fn new(strategy: Arc<dyn Strategy>, config: &ExtractorConfig) -> Self {
        Self {
            strategy,
            concurrency: config.concurrency(),
            failures: Arc::new(FailureCounter::new()),
        }
    }

    /// Report failures into a counter shared with other batches.
    pub fn with_failures(mut self, failures: Arc<FailureCounter>) -> Self {
        self.failures = failures;
        self
    }

    pub fn failures(&self) -> &Arc<FailureCounter> {
        &self.failures
    }

    /// Extracts every article.
    ///
    /// Per-article errors end up in [`BatchReport::errors`]. An article
    /// whose parent cannot be resolved aborts the whole batch, since every
    /// id derived from it would be wrong.
    #[instrument(skip_all, fields(strategy = self.strategy.name(), articles = articles.len()))]
    pub async fn run(&self, articles: Vec<ArticleRecord>) -> Result<BatchReport> {
        let total = articles.len();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for (position, article) in articles.into_iter().enumerate() {
            let semaphore = semaphore.clone();
            let strategy = self.strategy.clone();
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await?;
                let article_id = article.wikibase_item.clone();
                let result = tokio::task::spawn_blocking(move || strategy.parse(&article))
                    .await
                    .context("extraction task panicked")?;
                anyhow::Ok((position, article_id, result))
            });
        }

        let mut slots: Vec<Option<(String, Result<Extraction, ExtractError>)>> =
            (0..total).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let (position, article_id, result) = joined??;
            match result {
                Err(err @ ExtractError::UnresolvedParent { .. }) => {
                    tasks.abort_all();
                    return Err(anyhow::Error::new(err)
                        .context(format!("batch aborted at article {article_id}")));
                }
                result => slots[position] = Some((article_id, result)),
            }
        }

        let mut report = BatchReport {
            articles: total,
            ..Default::default()
        };
        for (article_id, result) in slots.into_iter().flatten() {
            match result {
                Ok(extraction) => {
                    if extraction.failed {
                        self.failures.record();
                        report.failed += 1;
                    }
                    report.entities.extend(extraction.entities);
                }
                Err(err) => {
                    warn!(article = %article_id, error = %err, "extraction failed");
                    report.errors.push(ArticleError {
                        article: article_id,
                        retryable: err.should_retry(),
                        error: err.to_string(),
                    });
                }
            }
        }

        info!(
            entities = report.entities.len(),
            failed = report.failed,
            errors = report.errors.len(),
            "batch finished"
        );
        Ok(report)
    }
}

// Pipeline - Producer-Consumer パイプライン
//
// タスク配信、ワーカープール、結果収集を接続するオーケストレーション。

use super::collector::spawn_result_collector;
use super::config::BatchConfig;
use super::producer::spawn_producer;
use super::reporting::ProgressReporter;
use super::types::{ProcessingOutcome, TaskUnit};
use super::worker::spawn_workers;
use crate::extraction::ExtractionBackend;
use crate::persistence::ResultPersistence;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 抽出処理パイプライン
pub struct ExtractionPipeline<E, P> {
    extractor: Arc<E>,
    persistence: Arc<P>,
}

impl<E, P> ExtractionPipeline<E, P>
where
    E: ExtractionBackend + 'static,
    P: ResultPersistence + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(extractor: Arc<E>, persistence: Arc<P>) -> Self {
        Self {
            extractor,
            persistence,
        }
    }

    /// タスクリストを処理し、タスク数と同数のOutcomeを返す
    ///
    /// 完了順は保証しない。個別タスクの失敗はOutcomeに折り込まれ、
    /// パイプライン自体のエラーにはならない。
    pub async fn execute<C, R>(
        &self,
        tasks: Vec<TaskUnit>,
        output_dir: &Path,
        config: &C,
        reporter: Arc<R>,
    ) -> Result<Vec<ProcessingOutcome>>
    where
        C: BatchConfig,
        R: ProgressReporter + 'static,
    {
        let worker_count = config.worker_count();
        let total_tasks = tasks.len();
        let report_progress = config.enable_progress_reporting();

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<TaskUnit>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel(config.channel_buffer_size());

        // 同時実行数の上限（ワーカー数と同じ）
        let semaphore = Arc::new(tokio::sync::Semaphore::new(worker_count));

        if report_progress {
            reporter.report_started(total_tasks, worker_count).await;
        }

        // Producer起動
        let producer_handle = spawn_producer(tasks, work_tx);

        // ワーカープール起動
        let worker_handles = spawn_workers(
            self.extractor.clone(),
            self.persistence.clone(),
            output_dir.to_path_buf(),
            work_rx,
            result_tx.clone(),
            semaphore,
            worker_count,
        );

        // Collector起動
        let collector_handle =
            spawn_result_collector(result_rx, total_tasks, reporter, report_progress);

        // Producer完了を待機
        producer_handle.await??;

        // ワーカー完了を待機
        for handle in worker_handles {
            handle.await??;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        let outcomes = collector_handle.await?;

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::config::DefaultBatchConfig;
    use crate::batch::reporting::NoOpProgressReporter;
    use crate::extraction::SimulatedExtractor;
    use crate::persistence::MemoryResultPersistence;
    use std::path::PathBuf;
    use std::time::Duration;

    fn tasks(count: usize) -> Vec<TaskUnit> {
        (0..count)
            .map(|i| TaskUnit {
                path: PathBuf::from(format!("/docs/doc{i}.pdf")),
                file_size_mb: 1.0,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_pipeline_empty_tasks() {
        let pipeline = ExtractionPipeline::new(
            Arc::new(SimulatedExtractor::new(Duration::ZERO)),
            Arc::new(MemoryResultPersistence::new()),
        );

        let outcomes = pipeline
            .execute(
                vec![],
                Path::new("/out"),
                &DefaultBatchConfig::default().with_worker_count(2),
                Arc::new(NoOpProgressReporter::new()),
            )
            .await
            .unwrap();

        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_pipeline_returns_one_outcome_per_task() {
        let persistence = MemoryResultPersistence::new();
        let pipeline = ExtractionPipeline::new(
            Arc::new(SimulatedExtractor::new(Duration::ZERO)),
            Arc::new(persistence.clone()),
        );

        let outcomes = pipeline
            .execute(
                tasks(7),
                Path::new("/out"),
                &DefaultBatchConfig::default().with_worker_count(3),
                Arc::new(NoOpProgressReporter::new()),
            )
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 7);
        assert!(outcomes.iter().all(|o| o.is_success()));
        assert_eq!(persistence.stored_count(), 7);
    }

    #[tokio::test]
    async fn test_pipeline_sequential_worker() {
        // W=1でも結果数と成功数の意味は変わらない
        let pipeline = ExtractionPipeline::new(
            Arc::new(SimulatedExtractor::new(Duration::ZERO)),
            Arc::new(MemoryResultPersistence::new()),
        );

        let outcomes = pipeline
            .execute(
                tasks(4),
                Path::new("/out"),
                &DefaultBatchConfig::default().with_worker_count(1),
                Arc::new(NoOpProgressReporter::new()),
            )
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.is_success()));
    }

    #[tokio::test]
    async fn test_pipeline_mixed_outcomes() {
        let pipeline = ExtractionPipeline::new(
            Arc::new(SimulatedExtractor::new(Duration::ZERO).with_failure_marker("doc1")),
            Arc::new(MemoryResultPersistence::new()),
        );

        let outcomes = pipeline
            .execute(
                tasks(3),
                Path::new("/out"),
                &DefaultBatchConfig::default().with_worker_count(2),
                Arc::new(NoOpProgressReporter::new()),
            )
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes.iter().filter(|o| o.is_success()).count(), 2);
        assert_eq!(outcomes.iter().filter(|o| !o.is_success()).count(), 1);
    }
}

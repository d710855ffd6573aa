// BatchEngine - 依存性注入によるバッチ処理エンジン
//
// 全ての依存関係（抽出バックエンド・永続化・設定・進捗報告）を
// コンストラクタで注入する。

use super::aggregator;
use super::config::BatchConfig;
use super::pipeline::ExtractionPipeline;
use super::reporting::ProgressReporter;
use super::types::{BatchOutcome, BatchReport, TaskUnit};
use crate::error::{BatchError, BatchResult};
use crate::extraction::ExtractionBackend;
use crate::persistence::ResultPersistence;
use crate::scanner::DocumentScanner;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// バッチ処理エンジン
pub struct BatchEngine<E, P, C, R> {
    extractor: E,
    persistence: P,
    config: C,
    reporter: R,
    output_dir: PathBuf,
}

impl<E, P, C, R> BatchEngine<E, P, C, R>
where
    E: ExtractionBackend + Clone + 'static,
    P: ResultPersistence + Clone + 'static,
    C: BatchConfig,
    R: ProgressReporter + Clone + 'static,
{
    /// 新しいエンジンを作成
    pub fn new(extractor: E, persistence: P, config: C, reporter: R, output_dir: PathBuf) -> Self {
        Self {
            extractor,
            persistence,
            config,
            reporter,
            output_dir,
        }
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 出力ディレクトリへの参照を取得
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 指定されたディレクトリを1バッチとして処理
    ///
    /// 対象ファイルが1つも見つからない場合はNothingToProcessを返す。
    /// これは「全件失敗したバッチ」とは区別される状態。
    pub async fn process_directory(&self, directory: &Path) -> BatchResult<BatchOutcome> {
        self.validate_config()?;

        let files = DocumentScanner::scan_directory(directory)
            .map_err(|e| BatchError::scan(directory.display().to_string(), e))?;

        if files.is_empty() {
            return Ok(BatchOutcome::NothingToProcess {
                directory: directory.to_path_buf(),
            });
        }

        let tasks = files.into_iter().map(TaskUnit::from_path).collect();
        let report = self.process_tasks(tasks).await?;
        Ok(BatchOutcome::Completed(report))
    }

    /// 構築済みのタスクリストを処理
    ///
    /// より細かい制御が必要な場合のAPI（スケーラビリティ計測など）
    pub async fn process_tasks(&self, tasks: Vec<TaskUnit>) -> BatchResult<BatchReport> {
        self.validate_config()?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| BatchError::persistence(e.into()))?;

        let worker_count = self.config.worker_count();
        let start_time = Instant::now();

        let pipeline = ExtractionPipeline::new(
            Arc::new(self.extractor.clone()),
            Arc::new(self.persistence.clone()),
        );

        let outcomes = pipeline
            .execute(
                tasks,
                &self.output_dir,
                &self.config,
                Arc::new(self.reporter.clone()),
            )
            .await
            .map_err(|e| BatchError::pipeline(e.to_string()))?;

        let total_time = start_time.elapsed();
        let report = aggregator::aggregate(outcomes, total_time, worker_count);

        if self.config.enable_progress_reporting() {
            self.reporter
                .report_completed(report.successful, report.failed)
                .await;
        }

        Ok(report)
    }

    fn validate_config(&self) -> BatchResult<()> {
        if self.config.worker_count() == 0 {
            return Err(BatchError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(BatchError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        Ok(())
    }
}

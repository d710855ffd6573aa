// Result Collector - ワーカーからの結果集約
//
// 結果チャンネルの唯一の読み手。完了順に依存しない収集のみを行い、
// 集計そのものはaggregatorが担当する。

use super::reporting::ProgressReporter;
use super::types::ProcessingOutcome;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collector: 結果を収集して進捗を報告
///
/// `report_progress` が偽の場合、収集のみを行い報告はスキップする。
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<ProcessingOutcome>,
    total_tasks: usize,
    reporter: Arc<R>,
    report_progress: bool,
) -> tokio::task::JoinHandle<Vec<ProcessingOutcome>>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut outcomes = Vec::with_capacity(total_tasks);

        while let Some(outcome) = result_rx.recv().await {
            if report_progress {
                if let ProcessingOutcome::Error {
                    file_path, error, ..
                } = &outcome
                {
                    reporter.report_error(file_path, error).await;
                }

                reporter
                    .report_file_completed(outcome.file_path(), outcomes.len() + 1, total_tasks)
                    .await;
            }

            outcomes.push(outcome);
        }

        outcomes
    })
}

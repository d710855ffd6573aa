// Worker - 並列ワーカー機能
//
// 各ワーカーは1タスクにつき必ず1つのProcessingOutcomeを送信する。
// 抽出・保存の失敗はErrorバリアントとして記録され、他タスクへ波及しない。

use super::types::{ProcessingOutcome, TaskUnit};
use crate::extraction::ExtractionBackend;
use crate::persistence::ResultPersistence;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 成功した抽出結果の保存先パスを導出
///
/// `invoice.pdf` → `<output_dir>/invoice_extracted.txt`
pub fn destination_path(output_dir: &Path, task_path: &Path) -> PathBuf {
    let stem = task_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{stem}_extracted.txt"))
}

/// 単一タスクの処理
///
/// 抽出呼び出しと結果保存の失敗を全て内部で捕捉し、Outcomeとして返す。
pub async fn process_task<E, P>(
    extractor: &E,
    persistence: &P,
    output_dir: &Path,
    task: &TaskUnit,
) -> ProcessingOutcome
where
    E: ExtractionBackend,
    P: ResultPersistence,
{
    let start_time = Instant::now();

    let result: Result<(usize, usize)> = async {
        let output = extractor.extract(&task.path).await?;

        let destination = destination_path(output_dir, &task.path);
        persistence.save_extraction(&output, &destination).await?;

        Ok((output.tables.len(), output.pages))
    }
    .await;

    let processing_time = start_time.elapsed();

    match result {
        Ok((tables_count, pages_count)) => ProcessingOutcome::Success {
            file_path: task.path.clone(),
            processing_time,
            tables_count,
            pages_count,
            file_size_mb: task.file_size_mb,
        },
        Err(error) => ProcessingOutcome::Error {
            file_path: task.path.clone(),
            processing_time,
            error: error.to_string(),
            file_size_mb: task.file_size_mb,
        },
    }
}

/// 単一ワーカー
pub fn spawn_single_worker<E, P>(
    extractor: Arc<E>,
    persistence: Arc<P>,
    output_dir: Arc<PathBuf>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<TaskUnit>>>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
) -> tokio::task::JoinHandle<Result<()>>
where
    E: ExtractionBackend + 'static,
    P: ResultPersistence + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次のタスクを取得
            let task = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(task) => task,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御（ブロッキングする抽出呼び出しを跨いで保持する
            // 唯一のリソースであり、ロックではない）
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| anyhow::anyhow!("Semaphore error: {e}"))?;

            let outcome =
                process_task(extractor.as_ref(), persistence.as_ref(), &output_dir, &task).await;

            // 結果送信
            if (result_tx.send(outcome).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// ワーカープール
pub fn spawn_workers<E, P>(
    extractor: Arc<E>,
    persistence: Arc<P>,
    output_dir: PathBuf,
    work_rx: mpsc::Receiver<TaskUnit>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    E: ExtractionBackend + 'static,
    P: ResultPersistence + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let output_dir = Arc::new(output_dir);
    let mut handles = Vec::new();

    for _ in 0..worker_count {
        let handle = spawn_single_worker(
            extractor.clone(),
            persistence.clone(),
            output_dir.clone(),
            work_rx.clone(),
            result_tx.clone(),
            semaphore.clone(),
        );
        handles.push(handle);
    }

    handles
}

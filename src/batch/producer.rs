// Producer - タスク配信機能

use super::types::TaskUnit;
use anyhow::Result;
use tokio::sync::mpsc;

/// Producer: タスクをワーカーチャンネルへ配信
pub fn spawn_producer(
    tasks: Vec<TaskUnit>,
    work_tx: mpsc::Sender<TaskUnit>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for task in tasks {
            if (work_tx.send(task).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}

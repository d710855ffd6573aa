// 進捗報告の抽象化と具象実装

use async_trait::async_trait;
use std::path::Path;

/// 進捗報告の抽象化トレイト
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize, worker_count: usize);

    /// 単一ファイル完了時の報告
    async fn report_file_completed(&self, file_path: &Path, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, successful: usize, failed: usize);
}

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_files: usize, worker_count: usize) {
        if !self.quiet {
            println!("🚀 Starting processing {total_files} files with {worker_count} worker(s)...");
        }
    }

    async fn report_file_completed(&self, file_path: &Path, completed: usize, total: usize) {
        if !self.quiet {
            let percentage = (completed as f64 / total as f64) * 100.0;
            println!(
                "📊 Progress: {completed}/{total} ({percentage:.1}%) - {}",
                file_path.display()
            );
        }
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error processing {}: {error}", file_path.display());
        }
    }

    async fn report_completed(&self, successful: usize, failed: usize) {
        if !self.quiet {
            println!("✅ Completed! Successful: {successful}, Failed: {failed}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize, _worker_count: usize) {}

    async fn report_file_completed(&self, _file_path: &Path, _completed: usize, _total: usize) {}

    async fn report_error(&self, _file_path: &Path, _error: &str) {}

    async fn report_completed(&self, _successful: usize, _failed: usize) {}
}

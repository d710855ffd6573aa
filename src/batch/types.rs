// バッチ処理に関連するデータ型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 処理対象の1ドキュメント
///
/// BatchEngineがファイル走査時に作成し、ワーカープールが所有する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUnit {
    pub path: PathBuf,
    pub file_size_mb: f64,
}

impl TaskUnit {
    /// ファイルサイズをメタデータから取得してタスクを作成
    ///
    /// サイズ取得に失敗した場合は0.0として扱う（処理自体は継続する）
    pub fn from_path(path: PathBuf) -> Self {
        let file_size_mb = std::fs::metadata(&path)
            .map(|m| m.len() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0);
        Self { path, file_size_mb }
    }
}

/// 個別ドキュメント処理の結果
///
/// 成功と失敗を型レベルで区別するタグ付き表現。
/// 成功時はエラーを持たず、失敗時は必ずエラー文字列を持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessingOutcome {
    Success {
        file_path: PathBuf,
        processing_time: Duration,
        tables_count: usize,
        pages_count: usize,
        file_size_mb: f64,
    },
    Error {
        file_path: PathBuf,
        processing_time: Duration,
        error: String,
        file_size_mb: f64,
    },
}

impl ProcessingOutcome {
    pub fn file_path(&self) -> &PathBuf {
        match self {
            Self::Success { file_path, .. } | Self::Error { file_path, .. } => file_path,
        }
    }

    pub fn processing_time(&self) -> Duration {
        match self {
            Self::Success {
                processing_time, ..
            }
            | Self::Error {
                processing_time, ..
            } => *processing_time,
        }
    }

    pub fn file_size_mb(&self) -> f64 {
        match self {
            Self::Success { file_size_mb, .. } | Self::Error { file_size_mb, .. } => *file_size_mb,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// 1バッチ実行全体のレポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    /// バッチ全体のウォールクロック時間
    pub total_time: Duration,
    /// 各タスクの処理時間の合計（並列実行時はtotal_timeを超える）
    pub total_processing_time: Duration,
    pub total_file_size_mb: f64,
    /// スループット（ファイル/秒）、total_timeが0の場合は0
    pub throughput_files_per_sec: f64,
    pub worker_count: usize,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<ProcessingOutcome>,
}

impl BatchReport {
    /// 平均処理時間（ミリ秒/ファイル）
    pub fn average_time_per_file_ms(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.total_processing_time.as_secs_f64() * 1000.0 / self.total_files as f64
    }

    /// 成功率（0.0〜1.0）
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.successful as f64 / self.total_files as f64
    }
}

/// バッチ実行の最終状態
///
/// 「処理対象なし」は成功0件のバッチとは別の状態として表現する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    Completed(BatchReport),
    NothingToProcess { directory: PathBuf },
}

impl BatchOutcome {
    pub fn report(&self) -> Option<&BatchReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::NothingToProcess { .. } => None,
        }
    }
}

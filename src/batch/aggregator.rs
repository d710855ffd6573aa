// Result Aggregator - バッチレポートの集計
//
// 完了順に依存しない可換な畳み込み。I/Oや乱数を持たない純粋関数のため、
// リテラルのOutcome列に対して直接ユニットテストできる。

use super::types::{BatchReport, ProcessingOutcome};
use chrono::Utc;
use std::time::Duration;

/// Outcome列を1つのBatchReportへ集計する
///
/// `successful + failed == total_files` を常に満たす。
/// ウォールクロック時間が0の場合、スループットは0として報告する。
pub fn aggregate(
    results: Vec<ProcessingOutcome>,
    total_time: Duration,
    worker_count: usize,
) -> BatchReport {
    let total_files = results.len();
    let successful = results.iter().filter(|r| r.is_success()).count();
    let failed = total_files - successful;

    let total_processing_time = results
        .iter()
        .map(|r| r.processing_time())
        .sum::<Duration>();
    let total_file_size_mb = results.iter().map(|r| r.file_size_mb()).sum::<f64>();

    let wall_secs = total_time.as_secs_f64();
    let throughput_files_per_sec = if wall_secs > 0.0 {
        total_files as f64 / wall_secs
    } else {
        0.0
    };

    BatchReport {
        total_files,
        successful,
        failed,
        total_time,
        total_processing_time,
        total_file_size_mb,
        throughput_files_per_sec,
        worker_count,
        timestamp: Utc::now(),
        results,
    }
}

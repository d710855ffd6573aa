// バッチ処理システムのモジュール
//
// Producer-Consumerパターンによる並列バッチ処理とその集計。

pub mod aggregator;
pub mod collector;
pub mod config;
pub mod engine;
pub mod pipeline;
pub mod producer;
pub mod reporting;
pub mod types;
pub mod worker;

// 公開API - 各機能から再エクスポート
pub use aggregator::aggregate;
pub use config::{BatchConfig, DefaultBatchConfig};
pub use engine::BatchEngine;
pub use pipeline::ExtractionPipeline;
pub use reporting::{ConsoleProgressReporter, NoOpProgressReporter, ProgressReporter};
pub use types::{BatchOutcome, BatchReport, ProcessingOutcome, TaskUnit};

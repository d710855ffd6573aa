// 並列ドキュメント抽出バッチツール
//
// ワーカープールによるバッチ処理エンジンと、ワーカー数構成を変えながら
// 効率的な並列度を実測するスケーラビリティ計測を提供する。

pub mod batch;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod persistence;
pub mod scanner;
pub mod sweep;

pub use batch::{
    BatchConfig, BatchEngine, BatchOutcome, BatchReport, ConsoleProgressReporter,
    DefaultBatchConfig, NoOpProgressReporter, ProcessingOutcome, ProgressReporter, TaskUnit,
};
pub use error::{BatchError, BatchResult};
pub use extraction::{ExtractionBackend, ExtractionOutput, SimulatedExtractor};
pub use persistence::{MemoryResultPersistence, ResultPersistence, TextFilePersistence};
pub use scanner::DocumentScanner;
pub use sweep::{ScalabilitySweep, SweepOutcome, SweepPolicy, SweepResult};

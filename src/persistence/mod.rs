// 抽出結果永続化の抽象化

use crate::extraction::ExtractionOutput;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub mod memory;
pub mod text;

pub use memory::MemoryResultPersistence;
pub use text::TextFilePersistence;

/// 抽出結果の永続化抽象化トレイト
///
/// 保存失敗はErrとして返し、呼び出し側がタスク失敗として記録する。
#[async_trait]
pub trait ResultPersistence: Send + Sync {
    /// 1ドキュメント分の抽出結果を保存する
    async fn save_extraction(&self, output: &ExtractionOutput, destination: &Path) -> Result<()>;
}

// ResultPersistence for Box<dyn ResultPersistence>
#[async_trait]
impl ResultPersistence for Box<dyn ResultPersistence> {
    async fn save_extraction(&self, output: &ExtractionOutput, destination: &Path) -> Result<()> {
        self.as_ref().save_extraction(output, destination).await
    }
}

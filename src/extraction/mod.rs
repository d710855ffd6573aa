// ドキュメント抽出バックエンドの抽象化
//
// 実際のOCR・テーブル抽出はリモートサービスに委譲される外部コラボレーター。
// このクレートは呼び出しを所要時間不明のブラックボックスとして扱う。

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

pub mod simulated;

pub use simulated::SimulatedExtractor;

/// 1ドキュメントの抽出結果
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutput {
    /// 抽出された全文テキスト
    pub text: String,
    /// 抽出されたテーブル（テーブル → 行 → セル）
    pub tables: Vec<Vec<Vec<String>>>,
    /// ドキュメントのページ数
    pub pages: usize,
}

/// 抽出バックエンドのトレイト
///
/// 失敗は必ずErrとして返す。パニックしてはならない。
#[automock]
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    /// 単一ドキュメントからテキストとテーブルを抽出する
    async fn extract(&self, path: &Path) -> Result<ExtractionOutput>;
}

// ExtractionBackend for Box<dyn ExtractionBackend>
#[async_trait]
impl ExtractionBackend for Box<dyn ExtractionBackend> {
    async fn extract(&self, path: &Path) -> Result<ExtractionOutput> {
        self.as_ref().extract(path).await
    }
}

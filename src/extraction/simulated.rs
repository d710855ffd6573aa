// シミュレーション用抽出バックエンド
//
// リモートサービスのI/O待ちを固定レイテンシで再現する。
// ベンチマークとデモで本物のサービスの代わりに使用する。

use super::{ExtractionBackend, ExtractionOutput};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// 固定レイテンシの抽出バックエンド
///
/// ファイル名に失敗マーカーを含むドキュメントは決定的に失敗する。
#[derive(Debug, Clone)]
pub struct SimulatedExtractor {
    latency: Duration,
    failure_marker: Option<String>,
}

impl SimulatedExtractor {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure_marker: None,
        }
    }

    /// ファイル名にマーカーを含むドキュメントを失敗させる
    pub fn with_failure_marker(mut self, marker: impl Into<String>) -> Self {
        self.failure_marker = Some(marker.into());
        self
    }

    fn should_fail(&self, path: &Path) -> bool {
        match &self.failure_marker {
            Some(marker) => path
                .file_name()
                .map(|name| name.to_string_lossy().contains(marker.as_str()))
                .unwrap_or(false),
            None => false,
        }
    }
}

#[async_trait]
impl ExtractionBackend for SimulatedExtractor {
    async fn extract(&self, path: &Path) -> Result<ExtractionOutput> {
        // リモート呼び出しのネットワーク待ちを再現
        tokio::time::sleep(self.latency).await;

        if self.should_fail(path) {
            bail!("simulated extraction failure: {}", path.display());
        }

        Ok(ExtractionOutput {
            text: format!("Simulated extraction of {}", path.display()),
            tables: vec![vec![
                vec!["Item".to_string(), "Amount".to_string()],
                vec!["Sample".to_string(), "42".to_string()],
            ]],
            pages: 1,
        })
    }
}

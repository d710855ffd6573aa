// テキストファイルへの抽出結果保存

use super::ResultPersistence;
use crate::extraction::ExtractionOutput;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::Path;

/// 抽出結果を整形済みテキストファイルとして保存する実装
#[derive(Debug, Default, Clone)]
pub struct TextFilePersistence;

impl TextFilePersistence {
    pub fn new() -> Self {
        Self
    }

    /// 抽出結果をレポート形式の文字列へ整形する
    fn render(output: &ExtractionOutput) -> String {
        let mut body = String::new();
        let separator = "=".repeat(80);

        let _ = writeln!(body, "{separator}");
        let _ = writeln!(body, "DOCUMENT TABLE EXTRACTION RESULTS");
        let _ = writeln!(body, "{separator}");
        let _ = writeln!(body);
        let _ = writeln!(
            body,
            "Processed: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(body, "Pages: {}", output.pages);
        let _ = writeln!(body, "Tables Found: {}", output.tables.len());
        let _ = writeln!(body);

        if !output.tables.is_empty() {
            let _ = writeln!(body, "EXTRACTED TABLES:");
            let _ = writeln!(body, "{}", "-".repeat(40));
            for (index, table) in output.tables.iter().enumerate() {
                let _ = writeln!(body);
                let _ = writeln!(body, "Table {}:", index + 1);
                for row in table {
                    let _ = writeln!(body, "{}", row.join(" | "));
                }
            }
            let _ = writeln!(body);
        }

        let _ = writeln!(body, "FULL TEXT CONTENT:");
        let _ = writeln!(body, "{}", "-".repeat(40));
        body.push_str(&output.text);

        body
    }
}

#[async_trait]
impl ResultPersistence for TextFilePersistence {
    async fn save_extraction(&self, output: &ExtractionOutput, destination: &Path) -> Result<()> {
        let body = Self::render(output);
        tokio::fs::write(destination, body)
            .await
            .with_context(|| format!("抽出結果の保存に失敗: {}", destination.display()))?;
        Ok(())
    }
}

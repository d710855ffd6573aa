use crate::batch::{
    BatchConfig, BatchEngine, BatchOutcome, ConsoleProgressReporter, DefaultBatchConfig,
};
use crate::extraction::SimulatedExtractor;
use crate::persistence::TextFilePersistence;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration struct for the process command
pub struct ProcessConfig {
    pub input_directory: PathBuf,
    pub output: PathBuf,
    pub workers: Option<usize>,
    pub latency_ms: u64,
}

/// Execute one batch run over the input directory
pub async fn execute_process(config: ProcessConfig) -> Result<()> {
    // Validate target directory
    if !config.input_directory.exists() {
        anyhow::bail!(
            "Input directory does not exist: {}",
            config.input_directory.display()
        );
    }

    if !config.input_directory.is_dir() {
        anyhow::bail!(
            "Input path is not a directory: {}",
            config.input_directory.display()
        );
    }

    let mut batch_config = DefaultBatchConfig::default();
    if let Some(workers) = config.workers {
        batch_config = batch_config.with_worker_count(workers);
    }

    println!("🚀 ドキュメント抽出バッチ処理");
    println!("📂 対象ディレクトリ: {}", config.input_directory.display());
    println!("📄 出力ディレクトリ: {}", config.output.display());

    let engine = BatchEngine::new(
        SimulatedExtractor::new(Duration::from_millis(config.latency_ms)),
        TextFilePersistence::new(),
        batch_config,
        ConsoleProgressReporter::new(),
        config.output.clone(),
    );

    println!("⚙️  設定:");
    println!("   - ワーカー数: {}", engine.config().worker_count());

    match engine.process_directory(&config.input_directory).await? {
        BatchOutcome::Completed(report) => {
            println!("\n✅ 処理完了!");
            println!("📊 処理結果:");
            println!("   - 対象ファイル数: {}", report.total_files);
            println!("   - 成功処理数: {}", report.successful);
            println!("   - エラー数: {}", report.failed);
            println!("   - 総処理時間: {:.2}秒", report.total_time.as_secs_f64());
            println!(
                "   - スループット: {:.2}ファイル/秒",
                report.throughput_files_per_sec
            );
            println!(
                "   - 平均処理時間: {:.2}ms/ファイル",
                report.average_time_per_file_ms()
            );

            if report.failed > 0 {
                println!("⚠️  {}個のファイルでエラーが発生しました", report.failed);
            }

            // Save the raw report next to the extracted artifacts
            let report_path = config.output.join("batch_report.json");
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&report_path, json)?;
            println!("📄 レポートは {} に保存されました", report_path.display());
        }
        BatchOutcome::NothingToProcess { directory } => {
            println!(
                "⚠️  処理対象のドキュメントが見つかりません: {}",
                directory.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_execute_process_writes_artifacts_and_report() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        fs::write(input_dir.path().join("invoice.pdf"), b"dummy pdf bytes").unwrap();

        execute_process(ProcessConfig {
            input_directory: input_dir.path().to_path_buf(),
            output: output_dir.path().to_path_buf(),
            workers: Some(2),
            latency_ms: 0,
        })
        .await
        .unwrap();

        assert!(output_dir.path().join("invoice_extracted.txt").exists());
        assert!(output_dir.path().join("batch_report.json").exists());
    }

    #[tokio::test]
    async fn test_execute_process_rejects_missing_directory() {
        let output_dir = TempDir::new().unwrap();

        let result = execute_process(ProcessConfig {
            input_directory: PathBuf::from("/nonexistent/input"),
            output: output_dir.path().to_path_buf(),
            workers: None,
            latency_ms: 0,
        })
        .await;

        assert!(result.is_err());
    }
}

use crate::extraction::SimulatedExtractor;
use crate::persistence::TextFilePersistence;
use crate::sweep::{ScalabilitySweep, SweepOutcome};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration struct for the benchmark command
pub struct BenchmarkConfig {
    pub input_directory: PathBuf,
    pub output: PathBuf,
    pub workers: Vec<usize>,
    pub latency_ms: u64,
}

/// Run the scalability sweep and write the comparison report
pub async fn execute_benchmark(config: BenchmarkConfig) -> Result<()> {
    if !config.input_directory.exists() {
        anyhow::bail!(
            "Input directory does not exist: {}",
            config.input_directory.display()
        );
    }

    // One timestamped directory per benchmark run, like outputs/20240101_120000
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let benchmark_dir = config.output.join(timestamp.to_string());

    println!("🎯 スケーラビリティ計測");
    println!("📂 対象ディレクトリ: {}", config.input_directory.display());
    println!("📁 結果保存先: {}", benchmark_dir.display());
    println!("{}", "=".repeat(60));

    let sweep = ScalabilitySweep::new(
        SimulatedExtractor::new(Duration::from_millis(config.latency_ms)),
        TextFilePersistence::new(),
    );

    match sweep
        .run(&config.input_directory, &benchmark_dir, &config.workers)
        .await?
    {
        SweepOutcome::Completed(result) => {
            println!();
            result.print_summary();

            let report_path = benchmark_dir.join("sweep_report.json");
            result.export_json(&report_path)?;
            println!("\n📄 詳細レポートを出力しました: {}", report_path.display());
        }
        SweepOutcome::NothingToProcess { directory } => {
            println!(
                "⚠️  処理対象のドキュメントが見つかりません: {}",
                directory.display()
            );
        }
    }

    Ok(())
}

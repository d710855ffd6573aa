// スケーラビリティ計測の比較分析
//
// BatchReport群からスピードアップ・効率・線形逸脱を導出する純粋な計算。
// I/Oを持たないため、リテラルのレポートに対して直接テストできる。

use crate::batch::BatchReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// スケーリング品質の分類しきい値
///
/// 0.5 / 1.0 という既定値は経験的なものであり、形式的なモデルから
/// 導かれたものではない。厳密な保証が必要な呼び出し側は独自の値を渡すこと。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPolicy {
    /// 線形逸脱がこの値未満なら「ほぼ線形」
    pub near_linear_deviation: f64,
    /// 線形逸脱がこの値未満なら「オーバーヘッドありで許容範囲」
    pub acceptable_deviation: f64,
}

impl Default for SweepPolicy {
    fn default() -> Self {
        Self {
            near_linear_deviation: 0.5,
            acceptable_deviation: 1.0,
        }
    }
}

impl SweepPolicy {
    fn classify(&self, deviation: f64) -> ScalingQuality {
        if deviation < self.near_linear_deviation {
            ScalingQuality::NearLinear
        } else if deviation < self.acceptable_deviation {
            ScalingQuality::GoodWithOverhead
        } else {
            ScalingQuality::DiminishingReturns
        }
    }
}

/// スケーリング品質の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingQuality {
    NearLinear,
    GoodWithOverhead,
    DiminishingReturns,
}

impl ScalingQuality {
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::NearLinear => "Near-linear scaling achieved ✅",
            Self::GoodWithOverhead => "Good scaling with some overhead ⚠️",
            Self::DiminishingReturns => "Diminishing returns observed ❌",
        }
    }
}

/// 1ワーカー構成分の比較指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationAnalysis {
    pub worker_count: usize,
    pub total_time: Duration,
    pub throughput_files_per_sec: f64,
    pub speedup: f64,
    pub efficiency: f64,
}

/// スケーラビリティ計測全体の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// ワーカー数 → バッチレポート
    pub reports: BTreeMap<usize, BatchReport>,
    /// 逐次実行（ベースライン構成）のウォールクロック時間
    pub baseline_time: Duration,
    /// 並列構成の最短ウォールクロック時間
    pub best_parallel_time: Duration,
    pub max_speedup: f64,
    /// ワーカー数昇順の比較指標（ベースライン含む）
    pub configurations: Vec<ConfigurationAnalysis>,
    /// 効率最大の構成（全構成が空バッチの場合はNone）
    pub optimal_workers: Option<usize>,
    /// 観測スピードアップと理想線形の平均絶対差
    pub linear_deviation: f64,
    pub scaling_quality: ScalingQuality,
    pub timestamp: DateTime<Utc>,
}

impl SweepResult {
    /// 結果サマリーをコンソールへ表示
    pub fn print_summary(&self) {
        println!("📊 スケーラビリティ計測サマリー");
        println!("{}", "=".repeat(60));
        println!(
            "   - ベースライン時間 (W=1): {:.2}s",
            self.baseline_time.as_secs_f64()
        );
        println!(
            "   - 最短並列時間: {:.2}s",
            self.best_parallel_time.as_secs_f64()
        );
        println!("   - 最大スピードアップ: {:.2}x", self.max_speedup);
        println!();
        println!("   Workers | Time (s) | Throughput | Speedup | Efficiency");
        for analysis in &self.configurations {
            println!(
                "   {:>7} | {:>8.2} | {:>10.2} | {:>6.2}x | {:>10.2}",
                analysis.worker_count,
                analysis.total_time.as_secs_f64(),
                analysis.throughput_files_per_sec,
                analysis.speedup,
                analysis.efficiency,
            );
        }
        println!();
        match self.optimal_workers {
            Some(workers) => println!("🏆 最適ワーカー数: {workers}"),
            None => println!("⚠️  有効な構成がないため最適ワーカー数は未決定"),
        }
        println!("📈 線形逸脱: {:.2}", self.linear_deviation);
        println!("🎯 {}", self.scaling_quality.verdict());
    }

    /// JSON形式でのレポート出力
    pub fn export_json(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn guarded_speedup(baseline: Duration, observed: Duration) -> f64 {
    let baseline_secs = baseline.as_secs_f64();
    let observed_secs = observed.as_secs_f64();
    if baseline_secs <= 0.0 || observed_secs <= 0.0 {
        // 計測不能な場合はスピードアップなしとして扱う
        1.0
    } else {
        baseline_secs / observed_secs
    }
}

/// レポート群から比較指標を導出する
///
/// 最小のワーカー数（通常は1）をベースラインとして扱う。
pub fn analyze(reports: BTreeMap<usize, BatchReport>, policy: &SweepPolicy) -> SweepResult {
    let baseline_workers = reports.keys().next().copied().unwrap_or(1);
    let baseline_time = reports
        .get(&baseline_workers)
        .map(|r| r.total_time)
        .unwrap_or(Duration::ZERO);

    let configurations: Vec<ConfigurationAnalysis> = reports
        .iter()
        .map(|(&worker_count, report)| {
            let speedup = guarded_speedup(baseline_time, report.total_time);
            ConfigurationAnalysis {
                worker_count,
                total_time: report.total_time,
                throughput_files_per_sec: report.throughput_files_per_sec,
                speedup,
                efficiency: speedup / worker_count as f64,
            }
        })
        .collect();

    let parallel: Vec<&ConfigurationAnalysis> = configurations
        .iter()
        .filter(|c| c.worker_count > baseline_workers)
        .collect();

    let best_parallel_time = parallel
        .iter()
        .map(|c| c.total_time)
        .min()
        .unwrap_or(baseline_time);
    let max_speedup = guarded_speedup(baseline_time, best_parallel_time);

    let all_degenerate = reports.values().all(|r| r.total_files == 0);
    let optimal_workers = if all_degenerate {
        None
    } else if parallel.iter().any(|c| c.speedup > 1.0) {
        // 効率最大の並列構成。同率の場合は最小ワーカー数を選ぶ
        // （昇順走査と「より大きい場合のみ更新」で保証される）
        let mut best: Option<&ConfigurationAnalysis> = None;
        for candidate in &parallel {
            match best {
                Some(current) if candidate.efficiency <= current.efficiency => {}
                _ => best = Some(candidate),
            }
        }
        best.map(|c| c.worker_count)
    } else {
        // どの並列構成もベースラインに勝てない場合はベースラインが最適
        Some(baseline_workers)
    };

    let linear_deviation = if parallel.is_empty() {
        0.0
    } else {
        parallel
            .iter()
            .map(|c| (c.speedup - c.worker_count as f64).abs())
            .sum::<f64>()
            / parallel.len() as f64
    };

    let scaling_quality = policy.classify(linear_deviation);

    SweepResult {
        reports,
        baseline_time,
        best_parallel_time,
        max_speedup,
        configurations,
        optimal_workers,
        linear_deviation,
        scaling_quality,
        timestamp: Utc::now(),
    }
}

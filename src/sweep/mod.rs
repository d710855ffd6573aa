// スケーラビリティ計測
//
// 同一の入力セットに対してワーカー数を変えながらBatchEngineを繰り返し実行し、
// 効率的な並列度を実測で決定する。

use crate::batch::{BatchEngine, DefaultBatchConfig, NoOpProgressReporter, TaskUnit};
use crate::error::{BatchError, BatchResult};
use crate::extraction::ExtractionBackend;
use crate::persistence::ResultPersistence;
use crate::scanner::DocumentScanner;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub mod analysis;

pub use analysis::{analyze, ConfigurationAnalysis, ScalingQuality, SweepPolicy, SweepResult};

/// スケーラビリティ計測の最終状態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SweepOutcome {
    Completed(SweepResult),
    NothingToProcess { directory: PathBuf },
}

impl SweepOutcome {
    pub fn result(&self) -> Option<&SweepResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::NothingToProcess { .. } => None,
        }
    }
}

/// ワーカー数構成ごとのバッチ実行ドライバー
///
/// 各構成の実行は互いに独立しており、構成間で共有される状態は
/// ベースライン時間（分析フェーズで固定）のみ。
pub struct ScalabilitySweep<E, P> {
    extractor: E,
    persistence: P,
    policy: SweepPolicy,
}

impl<E, P> ScalabilitySweep<E, P>
where
    E: ExtractionBackend + Clone + 'static,
    P: ResultPersistence + Clone + 'static,
{
    pub fn new(extractor: E, persistence: P) -> Self {
        Self {
            extractor,
            persistence,
            policy: SweepPolicy::default(),
        }
    }

    /// 分類しきい値を差し替える
    pub fn with_policy(mut self, policy: SweepPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 指定ディレクトリに対して全ワーカー構成を実行する
    ///
    /// 要求された構成リストは昇順に正規化され、ベースライン（W=1）が
    /// 必ず先頭で実行される。各構成の出力は
    /// `<output_root>/workers_<N>/` 以下へ書き込まれる。
    pub async fn run(
        &self,
        directory: &Path,
        output_root: &Path,
        worker_counts: &[usize],
    ) -> BatchResult<SweepOutcome> {
        if worker_counts.contains(&0) {
            return Err(BatchError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }

        // ベースラインを含む昇順・重複なしの構成リスト
        let mut configurations: BTreeSet<usize> = worker_counts.iter().copied().collect();
        configurations.insert(1);

        let files = DocumentScanner::scan_directory(directory)
            .map_err(|e| BatchError::scan(directory.display().to_string(), e))?;

        if files.is_empty() {
            return Ok(SweepOutcome::NothingToProcess {
                directory: directory.to_path_buf(),
            });
        }

        let tasks: Vec<TaskUnit> = files.into_iter().map(TaskUnit::from_path).collect();

        let mut reports = BTreeMap::new();
        for worker_count in configurations {
            let engine = BatchEngine::new(
                self.extractor.clone(),
                self.persistence.clone(),
                DefaultBatchConfig::default()
                    .with_worker_count(worker_count)
                    .with_progress_reporting(false),
                NoOpProgressReporter::new(),
                output_root.join(format!("workers_{worker_count}")),
            );

            let report = engine.process_tasks(tasks.clone()).await?;
            reports.insert(worker_count, report);
        }

        Ok(SweepOutcome::Completed(analyze(reports, &self.policy)))
    }
}

// バッチ処理のエンドツーエンド統合テスト

use doc_extract::{
    BatchEngine, BatchError, BatchOutcome, DefaultBatchConfig, NoOpProgressReporter,
    SimulatedExtractor, TextFilePersistence,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

fn create_documents(dir: &Path, count: usize, prefix: &str) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.join(format!("{prefix}_{i:04}.pdf"));
            fs::write(&path, b"dummy pdf bytes").unwrap();
            path
        })
        .collect()
}

fn engine(
    extractor: SimulatedExtractor,
    workers: usize,
    output_dir: &Path,
) -> BatchEngine<SimulatedExtractor, TextFilePersistence, DefaultBatchConfig, NoOpProgressReporter>
{
    BatchEngine::new(
        extractor,
        TextFilePersistence::new(),
        DefaultBatchConfig::default().with_worker_count(workers),
        NoOpProgressReporter::new(),
        output_dir.to_path_buf(),
    )
}

#[tokio::test]
async fn test_end_to_end_batch_writes_one_artifact_per_success() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    create_documents(input_dir.path(), 5, "doc");

    let engine = engine(
        SimulatedExtractor::new(Duration::ZERO),
        3,
        output_dir.path(),
    );

    let outcome = engine.process_directory(input_dir.path()).await.unwrap();
    let report = outcome.report().expect("Expected completed batch");

    assert_eq!(report.total_files, 5);
    assert_eq!(report.successful, 5);
    assert_eq!(report.failed, 0);

    // 成功1件につき1つの抽出結果ファイルが書かれる
    let artifacts: Vec<_> = fs::read_dir(output_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(artifacts.len(), 5);
    for i in 0..5 {
        assert!(artifacts.contains(&format!("doc_{i:04}_extracted.txt")));
    }
}

#[tokio::test]
async fn test_no_result_loss_or_duplication_across_worker_counts() {
    let input_dir = TempDir::new().unwrap();
    let documents = create_documents(input_dir.path(), 20, "doc");

    for workers in [1usize, 2, 5, 8] {
        let output_dir = TempDir::new().unwrap();
        let engine = engine(
            SimulatedExtractor::new(Duration::ZERO),
            workers,
            output_dir.path(),
        );

        let outcome = engine.process_directory(input_dir.path()).await.unwrap();
        let report = outcome.report().unwrap();

        // 入力1件につき結果がちょうど1つ
        assert_eq!(report.total_files, 20, "workers={workers}");
        assert_eq!(report.results.len(), 20, "workers={workers}");
        assert_eq!(report.successful + report.failed, report.total_files);

        let paths: HashSet<&PathBuf> = report.results.iter().map(|r| r.file_path()).collect();
        assert_eq!(paths.len(), 20, "workers={workers}");
        for doc in &documents {
            assert!(paths.contains(doc), "workers={workers}");
        }
    }
}

#[tokio::test]
async fn test_injected_failures_are_isolated() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    create_documents(input_dir.path(), 7, "doc");
    create_documents(input_dir.path(), 3, "fail");

    let engine = engine(
        SimulatedExtractor::new(Duration::ZERO).with_failure_marker("fail"),
        5,
        output_dir.path(),
    );

    let outcome = engine.process_directory(input_dir.path()).await.unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.total_files, 10);
    assert_eq!(report.successful, 7);
    assert_eq!(report.failed, 3);

    // 成功したタスクの成果物は失敗の影響を受けない
    let artifacts = fs::read_dir(output_dir.path()).unwrap().count();
    assert_eq!(artifacts, 7);
}

#[tokio::test]
async fn test_parallel_is_faster_than_sequential_with_identical_aggregates() {
    let input_dir = TempDir::new().unwrap();
    create_documents(input_dir.path(), 10, "doc");

    let output_seq = TempDir::new().unwrap();
    let sequential = engine(
        SimulatedExtractor::new(Duration::from_millis(50)),
        1,
        output_seq.path(),
    );
    let seq_outcome = sequential
        .process_directory(input_dir.path())
        .await
        .unwrap();
    let seq_report = seq_outcome.report().unwrap();

    let output_par = TempDir::new().unwrap();
    let parallel = engine(
        SimulatedExtractor::new(Duration::from_millis(50)),
        5,
        output_par.path(),
    );
    let par_outcome = parallel.process_directory(input_dir.path()).await.unwrap();
    let par_report = par_outcome.report().unwrap();

    // 集計の意味は同一、ウォールクロック時間だけが異なる
    assert_eq!(seq_report.total_files, par_report.total_files);
    assert_eq!(seq_report.successful, par_report.successful);
    assert_eq!(seq_report.failed, par_report.failed);

    // 10タスク x 50ms: 逐次は約500ms以上、5ワーカーなら大幅に短い
    assert!(seq_report.total_time >= Duration::from_millis(500));
    assert!(par_report.total_time < seq_report.total_time);
}

#[tokio::test]
async fn test_empty_directory_is_distinct_from_all_failed() {
    let empty_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let nothing = engine(
        SimulatedExtractor::new(Duration::ZERO),
        2,
        output_dir.path(),
    )
    .process_directory(empty_dir.path())
    .await
    .unwrap();

    assert!(matches!(nothing, BatchOutcome::NothingToProcess { .. }));

    // 全件失敗のバッチはCompletedであり、NothingToProcessとは別の状態
    let input_dir = TempDir::new().unwrap();
    create_documents(input_dir.path(), 4, "fail");

    let all_failed = engine(
        SimulatedExtractor::new(Duration::ZERO).with_failure_marker("fail"),
        2,
        output_dir.path(),
    )
    .process_directory(input_dir.path())
    .await
    .unwrap();

    let report = all_failed.report().expect("Expected completed batch");
    assert_eq!(report.total_files, 4);
    assert_eq!(report.successful, 0);
    assert_eq!(report.failed, 4);
}

#[tokio::test]
async fn test_zero_worker_configuration_is_fatal() {
    let output_dir = TempDir::new().unwrap();
    let engine = engine(
        SimulatedExtractor::new(Duration::ZERO),
        0,
        output_dir.path(),
    );

    let result = engine.process_tasks(vec![]).await;
    assert!(matches!(result, Err(BatchError::ConfigurationError { .. })));
}

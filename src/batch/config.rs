// バッチ処理の設定管理

/// バッチ処理の設定を抽象化するトレイト
pub trait BatchConfig: Send + Sync {
    /// ワーカー数（同時実行される抽出呼び出しの上限）
    fn worker_count(&self) -> usize;

    /// チャンネルバッファサイズ
    fn channel_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// デフォルト設定実装
///
/// 抽出呼び出しはI/Oバウンドのため、デフォルトのワーカー数はCPU数x2とする。
#[derive(Debug, Clone)]
pub struct DefaultBatchConfig {
    worker_count: usize,
    buffer_size: usize,
    enable_progress: bool,
}

impl DefaultBatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultBatchConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1) * 2,
            buffer_size: 100,
            enable_progress: true,
        }
    }
}

impl BatchConfig for DefaultBatchConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

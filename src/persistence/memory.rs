// メモリ内保存の永続化実装（テスト用および開発用）

use super::ResultPersistence;
use crate::extraction::ExtractionOutput;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// メモリ内保存の永続化実装
#[derive(Debug, Clone)]
pub struct MemoryResultPersistence {
    storage: Arc<Mutex<HashMap<PathBuf, ExtractionOutput>>>,
    failure_marker: Option<String>,
}

impl Default for MemoryResultPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryResultPersistence {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
            failure_marker: None,
        }
    }

    /// テスト用：保存先パスにマーカーを含む保存を失敗させる
    pub fn with_failure_marker(mut self, marker: impl Into<String>) -> Self {
        self.failure_marker = Some(marker.into());
        self
    }

    /// テスト用：保存された件数を取得
    pub fn stored_count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// テスト用：特定の保存先が存在するかチェック
    pub fn contains_destination(&self, destination: &Path) -> bool {
        self.storage.lock().unwrap().contains_key(destination)
    }

    /// テスト用：データクリア
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }
}

#[async_trait]
impl ResultPersistence for MemoryResultPersistence {
    async fn save_extraction(&self, output: &ExtractionOutput, destination: &Path) -> Result<()> {
        if let Some(marker) = &self.failure_marker {
            if destination.to_string_lossy().contains(marker.as_str()) {
                bail!("simulated persistence failure: {}", destination.display());
            }
        }

        self.storage
            .lock()
            .unwrap()
            .insert(destination.to_path_buf(), output.clone());
        Ok(())
    }
}

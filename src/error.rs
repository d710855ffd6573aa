// バッチ処理専用のカスタムエラー型定義

use thiserror::Error;

/// バッチ処理固有のエラー型
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("ファイル走査エラー: {path} - {source}")]
    ScanError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("パイプライン実行エラー: {message}")]
    PipelineError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("永続化エラー: {source}")]
    PersistenceError {
        #[source]
        source: anyhow::Error,
    },
}

impl BatchError {
    /// ファイル走査エラーの作成
    pub fn scan(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ScanError {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// パイプライン実行エラーの作成
    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::PipelineError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::PersistenceError { source }
    }
}

/// バッチ処理の結果型エイリアス
pub type BatchResult<T> = Result<T, BatchError>;

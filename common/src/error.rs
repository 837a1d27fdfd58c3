//! エラー型定義

use thiserror::Error;

use crate::draft::DraftError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// リクエスト自体が完了しなかった（transport層の失敗）
    #[error("network error: {0}")]
    Network(String),

    /// サーバが非成功ステータスを返した。メッセージは表示用
    #[error("{0}")]
    Server(String),

    /// レスポンスボディを期待した型に変換できなかった
    #[error("response decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Draft(#[from] DraftError),
}

impl Error {
    /// ユーザ向けメッセージへ変換する
    ///
    /// サーバ提供のメッセージと検証メッセージはそのまま見せる。
    /// それ以外は操作ごとのフォールバック文言を使う
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Server(message) => message.clone(),
            Error::Draft(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

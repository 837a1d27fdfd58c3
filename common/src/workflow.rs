//! 送信ワークフローの状態機械
//!
//! idle → [uploading] → saving → {succeeded | failed} の一直線の遷移。
//! 進行中は再送信できない（1フォームインスタンスにつき同時1件）。

/// 送信ワークフローの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Uploading,
    Saving,
    Succeeded,
    Failed(String),
}

impl SubmitPhase {
    /// ネットワーク処理が進行中かどうか
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitPhase::Uploading | SubmitPhase::Saving)
    }

    /// 新しい送信を開始できるかどうか
    ///
    /// 成功後はフォームが閉じるだけなので再送信は受け付けない
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmitPhase::Idle | SubmitPhase::Failed(_))
    }

    /// CSSクラス用のステータス文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Uploading => "uploading",
            SubmitPhase::Saving => "saving",
            SubmitPhase::Succeeded => "succeeded",
            SubmitPhase::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    }

    #[test]
    fn test_in_flight_phases_block_submission() {
        assert!(SubmitPhase::Uploading.is_in_flight());
        assert!(SubmitPhase::Saving.is_in_flight());
        assert!(!SubmitPhase::Uploading.can_submit());
        assert!(!SubmitPhase::Saving.can_submit());
    }

    #[test]
    fn test_failed_allows_resubmission() {
        // 失敗後はフォームが開いたまま再送信できる
        assert!(SubmitPhase::Idle.can_submit());
        assert!(SubmitPhase::Failed("upload failed".to_string()).can_submit());
    }

    #[test]
    fn test_succeeded_blocks_resubmission() {
        assert!(!SubmitPhase::Succeeded.is_in_flight());
        assert!(!SubmitPhase::Succeeded.can_submit());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(SubmitPhase::Idle.as_str(), "idle");
        assert_eq!(SubmitPhase::Uploading.as_str(), "uploading");
        assert_eq!(SubmitPhase::Saving.as_str(), "saving");
        assert_eq!(SubmitPhase::Succeeded.as_str(), "succeeded");
        assert_eq!(SubmitPhase::Failed(String::new()).as_str(), "failed");
    }
}

//! APIワイヤ型定義
//!
//! 2つのエンドポイントで使う型:
//! - ProjectRecord: 一覧取得(GET)のレスポンス要素
//! - NewProject: 新規登録(POST)のリクエストボディ
//! - UploadResponse: 画像アップロードのレスポンス
//! - ApiError: 失敗レスポンスのボディ

use serde::{Deserialize, Serialize};

/// 公開済みプロジェクトレコード（サーバ所有、クライアントは読み取りのみ）
///
/// `id`は1レスポンス内で一意。一覧はフェッチ間で不変として扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link_url: String,
    pub link_text: Option<String>,
    pub image_url: Option<String>,
}

impl ProjectRecord {
    /// リンクの表示ラベル。`link_text`が無ければ既定ラベル
    pub fn link_label(&self) -> &str {
        match self.link_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => "View App",
        }
    }
}

/// 新規登録リクエストボディ
///
/// フィールド順・スネークケースのままシリアライズされる
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub link_url: String,
    pub image_url: String,
}

/// 画像アップロードのレスポンス（ホスト済みURL）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// 失敗レスポンスのボディ
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_record_default() {
        let record = ProjectRecord::default();
        assert_eq!(record.id, 0);
        assert_eq!(record.title, "");
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_project_record_deserialize() {
        let json = r#"{
            "id": 7,
            "title": "Demo",
            "description": "A demo",
            "link_url": "https://demo.test",
            "link_text": "Open",
            "image_url": "https://img.test/a.png"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Demo");
        assert_eq!(record.link_text.as_deref(), Some("Open"));
        assert_eq!(record.image_url.as_deref(), Some("https://img.test/a.png"));
    }

    #[test]
    fn test_project_record_deserialize_missing_optionals() {
        // link_text / image_url が無いレコードも受理する
        let json = r#"{"id": 1, "title": "T", "description": "D", "link_url": "https://t.test"}"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(record.link_text.is_none());
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_project_record_deserialize_null_optionals() {
        let json = r#"{"id": 2, "title": "T", "description": "D", "link_url": "https://t.test", "link_text": null, "image_url": null}"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(record.link_text.is_none());
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_project_record_list_order_preserved() {
        let json = r#"[
            {"id": 3, "title": "C", "description": "", "link_url": ""},
            {"id": 1, "title": "A", "description": "", "link_url": ""},
            {"id": 2, "title": "B", "description": "", "link_url": ""}
        ]"#;

        let records: Vec<ProjectRecord> = serde_json::from_str(json).expect("デシリアライズ失敗");
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        // サーバの返却順をそのまま保持する（クライアント側ソートなし）
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_link_label_default() {
        let record = ProjectRecord::default();
        assert_eq!(record.link_label(), "View App");
    }

    #[test]
    fn test_link_label_empty_falls_back() {
        let record = ProjectRecord {
            link_text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.link_label(), "View App");
    }

    #[test]
    fn test_link_label_custom() {
        let record = ProjectRecord {
            link_text: Some("Visit".to_string()),
            ..Default::default()
        };
        assert_eq!(record.link_label(), "Visit");
    }

    #[test]
    fn test_new_project_serialize_exact_body() {
        let project = NewProject {
            title: "Demo".to_string(),
            description: "A demo".to_string(),
            link_url: "https://demo.test".to_string(),
            image_url: "https://img.test/a.png".to_string(),
        };

        let json = serde_json::to_string(&project).expect("シリアライズ失敗");
        assert_eq!(
            json,
            r#"{"title":"Demo","description":"A demo","link_url":"https://demo.test","image_url":"https://img.test/a.png"}"#
        );
    }

    #[test]
    fn test_upload_response_deserialize() {
        // アップロードエンドポイントはcamelCaseで返す
        let json = r#"{"imageUrl": "https://img.test/hosted.png"}"#;
        let response: UploadResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.image_url, "https://img.test/hosted.png");
    }

    #[test]
    fn test_api_error_deserialize() {
        let json = r#"{"error": "title is required"}"#;
        let error: ApiError = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(error.error, "title is required");
    }
}

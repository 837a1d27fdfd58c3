//! 送信フォームのドラフト
//!
//! フォームが開いている間だけ生きる一時状態。画像ソースはタグ付きの
//! `ImageSource` で表現し、URLモードとファイルモードの値が同時に
//! 残ることはない。

use thiserror::Error;

use crate::types::NewProject;

/// アップロード可能なファイルサイズ上限（5 MiB）
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// 画像ソースの入力モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Url,
    File,
}

/// 選択済みファイルのメタ情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
}

/// 画像ソース
///
/// Urlモードは入力されたURL文字列、Fileモードは選択済みファイルの
/// メタ情報（未選択ならNone）を保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(Option<FileMeta>),
}

/// ドラフトの検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Description is required")]
    MissingDescription,

    #[error("Link URL is required")]
    MissingLink,

    #[error("Please choose an image file")]
    MissingFile,

    #[error("Image file is too large (max 5 MB)")]
    FileTooLarge,
}

/// 送信フォームのドラフト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub title: String,
    pub description: String,
    pub link_url: String,
    pub image: ImageSource,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            link_url: String::new(),
            image: ImageSource::Url(String::new()),
        }
    }
}

impl SubmissionDraft {
    /// 現在の画像入力モード
    pub fn image_mode(&self) -> ImageMode {
        match self.image {
            ImageSource::Url(_) => ImageMode::Url,
            ImageSource::File(_) => ImageMode::File,
        }
    }

    /// 画像入力モードを切り替える
    ///
    /// URL値と選択済みファイルの両方を破棄する。同じモードを
    /// 指定した場合も同様にリセットする
    pub fn set_image_mode(&mut self, mode: ImageMode) {
        self.image = match mode {
            ImageMode::Url => ImageSource::Url(String::new()),
            ImageMode::File => ImageSource::File(None),
        };
    }

    /// URLモードの入力値を更新する。Fileモード中は何もしない
    pub fn set_image_url(&mut self, url: String) {
        if let ImageSource::Url(ref mut value) = self.image {
            *value = url;
        }
    }

    /// ファイル選択を受け付ける
    ///
    /// 以前の選択は常に置き換える。サイズ上限以上のファイルは
    /// 拒否し、保留中の選択もクリアする
    pub fn accept_file(&mut self, meta: FileMeta) -> Result<(), DraftError> {
        if meta.size_bytes >= MAX_FILE_BYTES {
            self.image = ImageSource::File(None);
            return Err(DraftError::FileTooLarge);
        }
        self.image = ImageSource::File(Some(meta));
        Ok(())
    }

    /// 送信前の検証。失敗した場合はネットワーク呼び出しを行わない
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.link_url.trim().is_empty() {
            return Err(DraftError::MissingLink);
        }
        if matches!(self.image, ImageSource::File(None)) {
            return Err(DraftError::MissingFile);
        }
        Ok(())
    }

    /// ドラフトを登録リクエストボディへ畳み込む
    ///
    /// Urlモードでは入力されたURLをそのまま使う。Fileモードでは
    /// アップロード済みのホストURLを使う
    pub fn to_new_project(&self, uploaded_url: Option<&str>) -> NewProject {
        let image_url = match &self.image {
            ImageSource::Url(url) => url.trim().to_string(),
            ImageSource::File(_) => uploaded_url.unwrap_or_default().to_string(),
        };

        NewProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            link_url: self.link_url.trim().to_string(),
            image_url,
        }
    }
}

//! Portfolio Common Library
//!
//! Web(WASM)フロントエンドと共有される型と送信ワークフロー

pub mod draft;
pub mod error;
pub mod types;
pub mod workflow;

pub use draft::{DraftError, FileMeta, ImageMode, ImageSource, SubmissionDraft, MAX_FILE_BYTES};
pub use error::{Error, Result};
pub use types::{ApiError, NewProject, ProjectRecord, UploadResponse};
pub use workflow::SubmitPhase;

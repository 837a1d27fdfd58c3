//! ポートフォリオAPI連携
//!
//! コレクションエンドポイント（一覧取得・新規登録）と画像アップロード
//! エンドポイントへのfetch呼び出し。タイムアウトや自動リトライは行わず、
//! リクエストは完了か失敗まで走る。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use portfolio_common::{ApiError, Error, NewProject, ProjectRecord, Result, UploadResponse};

const COLLECTION_ENDPOINT: &str = "https://portfolio-ddr-backend.onrender.com/api/projects";
const UPLOAD_ENDPOINT: &str = "https://portfolio-ddr-backend.onrender.com/api/upload";

/// JsValueのエラーをtransport層エラーへ変換
fn js_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

/// 失敗レスポンスのボディから`{error}`メッセージを取り出す
///
/// # Arguments
/// * `body` - レスポンスボディのテキスト
///
/// # Returns
/// サーバ提供のメッセージ。JSONでない、または`error`が空なら`None`
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|api_error| api_error.error)
        .filter(|message| !message.is_empty())
}

/// リクエストを送信してResponseを得る
async fn send(request: Request) -> Result<Response> {
    let window = web_sys::window().unwrap();
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    value.dyn_into::<Response>().map_err(js_error)
}

/// 非成功レスポンスを表示用メッセージ付きのエラーへ変換する
async fn response_error(resp: &Response, fallback: &str) -> Error {
    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.as_string()),
        Err(_) => None,
    };

    let message = body
        .as_deref()
        .and_then(server_error_message)
        .unwrap_or_else(|| format!("{} (HTTP {})", fallback, resp.status()));

    Error::Server(message)
}

/// 一覧を取得する
///
/// # Returns
/// サーバの返却順のままの`ProjectRecord`列
pub async fn fetch_projects() -> Result<Vec<ProjectRecord>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(COLLECTION_ENDPOINT, &opts).map_err(js_error)?;
    let resp = send(request).await?;

    if !resp.ok() {
        return Err(response_error(&resp, "Could not load the site list").await);
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

/// レコードを新規登録する
pub async fn create_project(project: &NewProject) -> Result<()> {
    let body = serde_json::to_string(project)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(COLLECTION_ENDPOINT, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let resp = send(request).await?;
    if !resp.ok() {
        return Err(response_error(&resp, "Could not save the site").await);
    }
    Ok(())
}

/// 画像をアップロードしてホスト済みURLを得る
///
/// # Arguments
/// * `file` - 選択済みの画像ファイル（上限チェックは選択時に済んでいる）
pub async fn upload_image(file: &File) -> Result<UploadResponse> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("image", file).map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // Content-Typeはブラウザがmultipart boundary付きで設定する
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(UPLOAD_ENDPOINT, &opts).map_err(js_error)?;
    let resp = send(request).await?;

    if !resp.ok() {
        return Err(response_error(&resp, "Image upload failed").await);
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_form_data_carries_single_image_field() {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("png-bytes"));
        let file = File::new_with_str_sequence(&parts, "shot.png").expect("file");

        let form = FormData::new().expect("form data");
        form.append_with_blob("image", &file).expect("append");

        assert!(form.get("image").is_instance_of::<File>());
    }
}

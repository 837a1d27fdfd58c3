//! サイト登録フォームコンポーネント
//!
//! ドラフトの編集、検証、アップロード→保存の2段階送信を担当する。
//! 選択済みのFileはSendでないため、リアクティブなシグナルではなく
//! ローカルのStoredValueに保持する。

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use portfolio_common::{
    DraftError, FileMeta, ImageMode, ImageSource, SubmissionDraft, SubmitPhase,
};

use crate::api::sites;

/// サイト登録フォーム
///
/// `on_saved`は保存成功時（クローズ前）に1回呼ばれる。`on_close`は
/// 成功表示後またはキャンセルでフォームを閉じる
#[component]
pub fn SiteForm<FS, FC>(on_saved: FS, on_close: FC) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let draft = RwSignal::new(SubmissionDraft::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let pending_file = StoredValue::new_local(None::<File>);

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let meta = FileMeta {
            name: file.name(),
            size_bytes: file.size() as u64,
        };

        let mut accepted = Ok(());
        draft.update(|d| accepted = d.accept_file(meta));

        match accepted {
            Ok(()) => {
                pending_file.set_value(Some(file));
                phase.set(SubmitPhase::Idle);
            }
            Err(err) => {
                // 上限以上のファイルは選択ごと破棄し、ネットワークには出さない
                pending_file.set_value(None);
                input.set_value("");
                phase.set(SubmitPhase::Failed(err.to_string()));
            }
        }
    };

    let select_mode = move |mode: ImageMode| {
        draft.update(|d| d.set_image_mode(mode));
        pending_file.set_value(None);
        phase.set(SubmitPhase::Idle);
    };

    let on_submit = {
        let on_saved = on_saved.clone();
        let on_close = on_close.clone();
        move |_: web_sys::MouseEvent| {
            if !phase.get_untracked().can_submit() {
                return;
            }

            let current = draft.get_untracked();
            if let Err(err) = current.validate() {
                phase.set(SubmitPhase::Failed(err.to_string()));
                return;
            }

            let file = pending_file.get_value();
            let on_saved = on_saved.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                // ファイルモードでは保存の前に必ずアップロードを済ませる
                let uploaded_url = if matches!(current.image, ImageSource::File(_)) {
                    let Some(file) = file else {
                        phase.set(SubmitPhase::Failed(DraftError::MissingFile.to_string()));
                        return;
                    };

                    phase.set(SubmitPhase::Uploading);
                    match sites::upload_image(&file).await {
                        Ok(response) => Some(response.image_url),
                        Err(err) => {
                            web_sys::console::error_1(&JsValue::from_str(&format!(
                                "Error uploading image: {}",
                                err
                            )));
                            phase.set(SubmitPhase::Failed(
                                err.user_message("Image upload failed. Please try again."),
                            ));
                            return;
                        }
                    }
                } else {
                    None
                };

                phase.set(SubmitPhase::Saving);
                let project = current.to_new_project(uploaded_url.as_deref());
                match sites::create_project(&project).await {
                    Ok(()) => {
                        phase.set(SubmitPhase::Succeeded);
                        on_saved(());
                        // 成功メッセージを見せてから閉じる
                        TimeoutFuture::new(1_000).await;
                        on_close(());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&JsValue::from_str(&format!(
                            "Error saving site: {}",
                            err
                        )));
                        phase.set(SubmitPhase::Failed(
                            err.user_message("Could not save the site. Please try again."),
                        ));
                    }
                }
            });
        }
    };

    view! {
        <div class=move || format!("site-form {}", phase.get().as_str())>
            <h3>"Add a Site"</h3>

            <div class="form-group">
                <label for="site-title">"Title"</label>
                <input
                    type="text"
                    id="site-title"
                    placeholder="My favorite site"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="site-description">"Description"</label>
                <textarea
                    id="site-description"
                    placeholder="Why is it worth a visit?"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="site-link">"Link URL"</label>
                <input
                    type="url"
                    id="site-link"
                    placeholder="https://..."
                    prop:value=move || draft.with(|d| d.link_url.clone())
                    on:input=move |ev| draft.update(|d| d.link_url = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <span class="form-label">"Snapshot image"</span>
                <div class="image-mode">
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="image-mode"
                            checked=move || draft.with(|d| d.image_mode() == ImageMode::Url)
                            on:change=move |_| select_mode(ImageMode::Url)
                        />
                        "Image URL"
                    </label>
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="image-mode"
                            checked=move || draft.with(|d| d.image_mode() == ImageMode::File)
                            on:change=move |_| select_mode(ImageMode::File)
                        />
                        "Upload file"
                    </label>
                </div>

                <Show when=move || draft.with(|d| d.image_mode() == ImageMode::Url)>
                    <input
                        type="url"
                        id="site-image-url"
                        placeholder="https://img.example/snapshot.png"
                        prop:value=move || {
                            draft.with(|d| match &d.image {
                                ImageSource::Url(url) => url.clone(),
                                ImageSource::File(_) => String::new(),
                            })
                        }
                        on:input=move |ev| draft.update(|d| d.set_image_url(event_target_value(&ev)))
                    />
                </Show>

                <Show when=move || draft.with(|d| d.image_mode() == ImageMode::File)>
                    <input
                        type="file"
                        id="site-image-file"
                        accept="image/*"
                        on:change=on_file_change
                    />
                    <p class="form-hint">
                        {move || {
                            draft.with(|d| match &d.image {
                                ImageSource::File(Some(meta)) => format!("Selected: {}", meta.name),
                                _ => "PNG or JPEG, up to 5 MB".to_string(),
                            })
                        }}
                    </p>
                </Show>
            </div>

            {move || match phase.get() {
                SubmitPhase::Succeeded => {
                    Some(view! { <p class="form-success">"Site saved!"</p> }.into_any())
                }
                SubmitPhase::Failed(message) => {
                    Some(view! { <p class="form-error">{message}</p> }.into_any())
                }
                _ => None,
            }}

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !phase.get().can_submit()
                    on:click=on_submit
                >
                    {move || match phase.get() {
                        SubmitPhase::Uploading => "Uploading image...",
                        SubmitPhase::Saving => "Saving...",
                        _ => "Add Site",
                    }}
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || phase.get().is_in_flight()
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close(())
                    }
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

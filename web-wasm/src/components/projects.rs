//! プロジェクト一覧コンポーネント
//!
//! マウント時と更新カウンタの変化ごとに1回だけ一覧を取得し、
//! loading → {error | empty | loaded} を描画する。書き込みは行わない。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use portfolio_common::{Error, ProjectRecord};

use crate::api::sites;

const LOAD_ERROR_MESSAGE: &str = "Could not load the site list. Please try again later.";

/// 一覧の取得状態
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    Loaded(Vec<ProjectRecord>),
}

impl ListState {
    /// 取得結果を表示状態へ変換する
    ///
    /// 空の成功レスポンスはエラーではなくLoaded(空)のまま保持し、
    /// 描画側で「まだ何もない」状態として区別する
    fn from_result(result: Result<Vec<ProjectRecord>, Error>) -> Self {
        match result {
            Ok(projects) => ListState::Loaded(projects),
            Err(err) => ListState::Failed(err.user_message(LOAD_ERROR_MESSAGE)),
        }
    }
}

/// プロジェクト一覧
///
/// `refresh`は保存成功時にインクリメントされる更新カウンタ。
/// 変化のたびに一覧を破棄して再取得する
#[component]
pub fn Projects(refresh: ReadSignal<u32>) -> impl IntoView {
    let (state, set_state) = signal(ListState::Loading);

    Effect::new(move |_| {
        refresh.track();
        set_state.set(ListState::Loading);

        spawn_local(async move {
            let result = sites::fetch_projects().await;
            if let Err(err) = &result {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "Error loading site list: {}",
                    err
                )));
            }
            set_state.set(ListState::from_result(result));
        });
    });

    view! {
        <section class="projects">
            <h2>"Featured Sites"</h2>
            {move || match state.get() {
                ListState::Loading => {
                    view! { <p class="projects-status">"Loading List..."</p> }.into_any()
                }
                ListState::Failed(message) => {
                    view! { <p class="projects-error">{message}</p> }.into_any()
                }
                ListState::Loaded(projects) if projects.is_empty() => {
                    view! { <p class="projects-empty">"No sites here yet. Be the first to add one!"</p> }
                        .into_any()
                }
                ListState::Loaded(projects) => {
                    view! {
                        <div class="projects-grid">
                            <For
                                each=move || projects.clone()
                                key=|project| project.id
                                children=move |project| view! { <ProjectCard project=project /> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

/// プロジェクトカード
#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let link_label = project.link_label().to_string();
    let snapshot = project.image_url.clone().map(|src| {
        let alt = format!("Snapshot of {}", project.title);
        view! { <img src=src alt=alt class="project-snapshot" /> }
    });

    view! {
        <div class="project-card">
            {snapshot}
            <h3>{project.title.clone()}</h3>
            <p>{project.description.clone()}</p>
            <a
                href=project.link_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="project-btn"
            >
                {link_label}
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_empty_is_loaded_not_failed() {
        let state = ListState::from_result(Ok(vec![]));
        assert_eq!(state, ListState::Loaded(vec![]));
    }

    #[test]
    fn test_from_result_keeps_server_order() {
        let records = vec![
            ProjectRecord {
                id: 9,
                ..Default::default()
            },
            ProjectRecord {
                id: 3,
                ..Default::default()
            },
        ];

        match ListState::from_result(Ok(records)) {
            ListState::Loaded(projects) => {
                let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec![9, 3]);
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_from_result_server_message_is_shown() {
        let state = ListState::from_result(Err(Error::Server("maintenance".to_string())));
        assert_eq!(state, ListState::Failed("maintenance".to_string()));
    }

    #[test]
    fn test_from_result_network_error_uses_fallback() {
        let state =
            ListState::from_result(Err(Error::Network("TypeError: Failed to fetch".to_string())));
        assert_eq!(state, ListState::Failed(LOAD_ERROR_MESSAGE.to_string()));
    }
}

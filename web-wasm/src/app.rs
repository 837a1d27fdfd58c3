//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{hero::Hero, projects::Projects};

/// アプリケーションのルート
///
/// 更新カウンタ（リフレッシュシグナル）を所有する。保存成功時に
/// Heroからインクリメントされ、Projectsが再取得を行う
#[component]
pub fn App() -> impl IntoView {
    let (refresh, set_refresh) = signal(0u32);

    let on_projects_refresh = move |_: ()| {
        set_refresh.update(|version| *version += 1);
    };

    view! {
        <div class="app">
            <Hero on_projects_refresh=on_projects_refresh />
            <Projects refresh=refresh />
        </div>
    }
}

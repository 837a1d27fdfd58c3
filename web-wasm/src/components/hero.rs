//! ヒーローバナーコンポーネント
//!
//! 見出しとCTAに加えて、Aboutモーダルとサイト登録モーダルを開く。
//! 登録フォームは閉じるたびに破棄され、ドラフトは持ち越されない。

use leptos::prelude::*;

use crate::components::site_form::SiteForm;

#[component]
pub fn Hero<F>(on_projects_refresh: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (show_about, set_show_about) = signal(false);
    let (show_form, set_show_form) = signal(false);

    view! {
        <section class="hero">
            <h2>"This is a List of my Favorite Sites"</h2>
            <p>"Do "<strong>"YOU "</strong>"Like"<strong>" IT?"</strong></p>

            <div class="hero-actions">
                <a href="mailto:ddarocha@jdnservice.com" class="cta-button">
                    "Get in Touch ME"
                </a>
                <button class="btn btn-secondary" on:click=move |_| set_show_about.set(true)>
                    "About"
                </button>
                <button class="btn btn-primary" on:click=move |_| set_show_form.set(true)>
                    "Add Site"
                </button>
            </div>

            <Show when=move || show_about.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3>"About this page"</h3>
                        <p>
                            "A hand-picked list of sites I like. Every card is loaded live
                            from the portfolio API, and the Add Site button lets you suggest
                            a new one, with an optional snapshot image."
                        </p>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_show_about.set(false)
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <SiteForm
                            on_saved={
                                let on_projects_refresh = on_projects_refresh.clone();
                                move |_| on_projects_refresh(())
                            }
                            on_close=move |_| set_show_form.set(false)
                        />
                    </div>
                </div>
            </Show>
        </section>
    }
}

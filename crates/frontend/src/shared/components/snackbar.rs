use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::list_state::Snackbar;

const AUTO_HIDE_MS: u32 = 4000;

/// Всплывающее уведомление об успехе/ошибке; закрывается само через несколько секунд
#[component]
pub fn SnackbarView(
    #[prop(into)] snackbar: Signal<Snackbar>,
    on_close: Callback<()>,
) -> impl IntoView {
    Effect::new(move |_| {
        if snackbar.with(|s| s.open) {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_HIDE_MS).await;
                // страница могла быть закрыта за время ожидания
                if snackbar.try_with_untracked(|s| s.open).unwrap_or(false) {
                    on_close.run(());
                }
            });
        }
    });

    view! {
        <Show when=move || snackbar.with(|s| s.open)>
            {move || {
                let s = snackbar.get();
                view! {
                    <div class=s.variation.class() role="status">
                        <span class="snackbar__message">{s.message}</span>
                        <button class="snackbar__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                }
            }}
        </Show>
    }
}

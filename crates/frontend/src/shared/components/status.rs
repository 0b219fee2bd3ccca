use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ErrorBox(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
            <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
            <span class="warning-box__text" style="color: var(--color-error);">{message}</span>
        </div>
    }
}

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
            <Spinner />
        </Flex>
    }
}

#[component]
pub fn Empty(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div style="padding: 48px; text-align: center;">
            <p style="color: var(--thaw-color-neutral-foreground-2);">{message}</p>
        </div>
    }
}

/// Подтверждение через диалог браузера
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

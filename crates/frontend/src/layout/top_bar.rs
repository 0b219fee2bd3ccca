//! Верхняя панель: название приложения, переключение навигации и языка.

use contracts::domain::common::Locale;
use leptos::prelude::*;

use crate::shared::i18n::{t, use_app_context};
use crate::shared::icons::icon;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let locale = ctx.locale;

    let locale_button = move |target: Locale| {
        view! {
            <button
                class="top-header__locale-btn"
                class:top-header__locale-btn--active=move || locale.get() == target
                on:click=move |_| ctx.set_locale(target)
            >
                {target.suffix()}
            </button>
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || t(locale.get(), "app.toggleNavigation")
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || t(locale.get(), "app.title")}</span>
            </div>

            <div class="top-header__actions">
                {locale_button(Locale::Ru)}
                {locale_button(Locale::En)}
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Кнопки строки списка: переход к редактированию и удаление
#[component]
pub fn RowActions(
    #[prop(into)] edit_href: String,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="row-actions">
            <a class="button button--icon" href=edit_href aria-label="edit">
                {icon("edit")}
            </a>
            <button
                class="button button--icon button--danger"
                aria-label="delete"
                on:click=move |_| on_delete.run(())
            >
                {icon("delete")}
            </button>
        </span>
    }
}

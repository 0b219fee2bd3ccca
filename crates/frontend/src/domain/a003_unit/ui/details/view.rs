use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::UnitDetailsViewModel;
use crate::shared::components::{ErrorBox, Loader, SnackbarView, TextField};
use crate::shared::data_access::use_data_access;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;

/// Страница маршрута `/units/unit[/:id]`
#[component]
pub fn UnitDetailsPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id"));
        view! { <UnitDetails id=id /> }
    }
}

#[component]
pub fn UnitDetails(id: Option<String>) -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let navigate = use_navigate();

    let vm = UnitDetailsViewModel::new();
    vm.load(data_access, id);

    let on_save = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        vm.save_command(data_access, locale.get_untracked(), move |new_id| {
            navigate(&format!("/units/unit/{}", new_id), Default::default());
        });
    };

    view! {
        <div class="details-container unit-details">
            <div class="details-header">
                <h3>
                    {move || t(locale.get(), if vm.is_edit_mode() { "unit.update" } else { "unit.create" })}
                </h3>
                <a class="button button--secondary" href="/units">
                    {icon("x")}
                    {move || t(locale.get(), "app.back")}
                </a>
            </div>

            {move || vm.load_error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Loader /> }>
                <div class="details-form">
                    <TextField
                        label=Signal::derive(move || t(locale.get(), "unit.titleRU"))
                        name="titleRU"
                        value=Signal::derive(move || vm.form.with(|f| f.title_ru.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title_ru = v))
                        error=Signal::derive(move || vm.field_error(locale.get(), "titleRU"))
                    />
                    <TextField
                        label=Signal::derive(move || t(locale.get(), "unit.titleEN"))
                        name="titleEN"
                        value=Signal::derive(move || vm.form.with(|f| f.title_en.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title_en = v))
                        error=Signal::derive(move || vm.field_error(locale.get(), "titleEN"))
                    />
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click=on_save.clone()
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || t(locale.get(), if vm.is_edit_mode() { "app.save" } else { "app.create" })}
                    </button>
                </div>
            </Show>

            <SnackbarView
                snackbar=Signal::derive(move || vm.snackbar.get())
                on_close=Callback::new(move |_| vm.snackbar.update(|s| s.open = false))
            />
        </div>
    }
}

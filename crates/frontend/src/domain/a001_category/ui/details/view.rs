use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::{ErrorBox, Loader, SelectField, SnackbarView, TextField};
use crate::shared::data_access::use_data_access;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;

/// Страница маршрута `/categories/category[/:id]`
#[component]
pub fn CategoryDetailsPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id"));
        view! { <CategoryDetails id=id /> }
    }
}

#[component]
pub fn CategoryDetails(id: Option<String>) -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let navigate = use_navigate();

    let vm = CategoryDetailsViewModel::new();
    vm.load(data_access, id);

    let on_save = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        vm.save_command(data_access, locale.get_untracked(), move |new_id| {
            navigate(&format!("/categories/category/{}", new_id), Default::default());
        });
    };

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {move || {
                        let key = if vm.is_edit_mode() { "category.update" } else { "category.create" };
                        t(locale.get(), key)
                    }}
                </h3>
                <a class="button button--secondary" href="/categories">
                    {icon("x")}
                    {move || t(locale.get(), "app.back")}
                </a>
            </div>

            {move || vm.load_error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Loader /> }>
                <div class="details-form">
                    <TextField
                        label=Signal::derive(move || t(locale.get(), "category.titleRU"))
                        name="titleRU"
                        value=Signal::derive(move || vm.form.with(|f| f.title_ru.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title_ru = v))
                        error=Signal::derive(move || vm.field_error(locale.get(), "titleRU"))
                    />
                    <TextField
                        label=Signal::derive(move || t(locale.get(), "category.titleEN"))
                        name="titleEN"
                        value=Signal::derive(move || vm.form.with(|f| f.title_en.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title_en = v))
                        error=Signal::derive(move || vm.field_error(locale.get(), "titleEN"))
                    />
                    <SelectField
                        label=Signal::derive(move || t(locale.get(), "categories.parent"))
                        name="parentId"
                        value=Signal::derive(move || vm.form.with(|f| f.parent_id.clone().unwrap_or_default()))
                        options=Signal::derive(move || {
                            let locale = locale.get();
                            vm.parents.with(|parents| {
                                parents
                                    .iter()
                                    .map(|p| (p.id.clone(), p.title(locale).to_string()))
                                    .collect::<Vec<_>>()
                            })
                        })
                        on_change=Callback::new(move |v: String| {
                            vm.form.update(|f| f.parent_id = if v.is_empty() { None } else { Some(v) });
                        })
                        error=Signal::derive(move || vm.field_error(locale.get(), "parentId"))
                    />
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click=on_save.clone()
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || {
                            let key = if vm.is_edit_mode() { "app.save" } else { "app.create" };
                            t(locale.get(), key)
                        }}
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

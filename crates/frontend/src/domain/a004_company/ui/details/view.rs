use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::CompanyDetailsViewModel;
use crate::shared::components::{ErrorBox, Loader, SelectField, SnackbarView, TextField};
use crate::shared::data_access::use_data_access;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;

/// Страница маршрута `/companies/company[/:id]`
#[component]
pub fn CompanyDetailsPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id"));
        view! { <CompanyDetails id=id /> }
    }
}

#[component]
pub fn CompanyDetails(id: Option<String>) -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let navigate = use_navigate();

    let vm = CompanyDetailsViewModel::new();
    vm.load(data_access, id);

    let on_save = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        vm.save_command(data_access, locale.get_untracked(), move |new_id| {
            navigate(&format!("/companies/company/{}", new_id), Default::default());
        });
    };

    // Текстовые поля формы: (ключ поля, ключ подписи)
    let text_field = move |field: &'static str, label_id: &'static str| {
        view! {
            <TextField
                label=Signal::derive(move || t(locale.get(), label_id))
                name=field
                value=Signal::derive(move || vm.form.with(|f| f.text(field).to_string()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_text(field, v)))
                error=Signal::derive(move || vm.field_error(locale.get(), field))
            />
        }
    };

    view! {
        <div class="details-container company-details">
            <div class="details-header">
                <h3>
                    {move || t(locale.get(), if vm.is_edit_mode() { "company.update" } else { "company.create" })}
                </h3>
                <a class="button button--secondary" href="/companies">
                    {icon("x")}
                    {move || t(locale.get(), "app.back")}
                </a>
            </div>

            {move || vm.load_error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Loader /> }>
                <div class="details-form">
                    {text_field("name", "company.name")}
                    {text_field("country", "company.country")}
                    {text_field("city", "company.city")}
                    {text_field("address", "company.address")}
                    {text_field("position", "company.position")}
                    <SelectField
                        label=Signal::derive(move || t(locale.get(), "company.client"))
                        name="userId"
                        value=Signal::derive(move || vm.selected_client())
                        options=Signal::derive(move || {
                            vm.clients.with(|clients| {
                                clients
                                    .iter()
                                    .map(|c| (c.id.clone(), c.email.clone()))
                                    .collect::<Vec<_>>()
                            })
                        })
                        on_change=Callback::new(move |v: String| vm.select_client(&v))
                        error=Signal::derive(move || vm.field_error(locale.get(), "userId"))
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

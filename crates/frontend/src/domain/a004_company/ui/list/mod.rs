use contracts::domain::a004_company::aggregate::Company;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a004_company::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{confirm, Empty, ErrorBox, Loader, RowActions, SnackbarView};
use crate::shared::data_access::use_data_access;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;
use crate::shared::list_state::create_state;
use crate::shared::list_utils::{FieldComparator, SortValue, Sortable};

const CLIENT_FIELD: &str = "user.email";

impl Sortable for Company {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "id" => SortValue::numeric(&self.id),
            "name" => SortValue::text(&self.name),
            "country" => SortValue::text(&self.country),
            "city" => SortValue::text(&self.city),
            "address" => SortValue::text(&self.address),
            "position" => SortValue::text(&self.position),
            CLIENT_FIELD => SortValue::optional_text(self.user.as_ref().map(|u| u.email.as_str())),
            "createdAt" => SortValue::optional_numeric(self.created_at.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

/// Email сравнивается без учёта регистра; компании без клиента идут первыми
fn compare_client_email(a: &Company, b: &Company) -> Ordering {
    let email = |c: &Company| c.user.as_ref().map(|u| u.email.to_lowercase());
    email(a).cmp(&email(b))
}

fn custom_comparators() -> [(&'static str, FieldComparator<Company>); 1] {
    [(CLIENT_FIELD, compare_client_email)]
}

#[component]
#[allow(non_snake_case)]
pub fn CompanyList() -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let state = create_state("id");
    let items: RwSignal<Vec<Company>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move |refresh: bool| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_companies(data_access, refresh).await {
                Ok(list) => {
                    items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let handle_delete = move |id: String| {
        let current_locale = locale.get_untracked();
        if !confirm(&t(current_locale, "app.confirmDelete")) {
            return;
        }
        spawn_local(async move {
            let result = api::delete_company(data_access, id.clone()).await;
            state.update(|s| s.apply_delete_result(current_locale, &id, result));
        });
    };

    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.request_sort(&field)));
    let rows = Memo::new(move |_| {
        state.with(|s| items.with(|list| s.visible_rows(list, &custom_comparators())))
    });

    load(false);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || t(locale.get(), "companies.title")}</h1>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href="/companies/company">
                        {icon("plus")}
                        {move || t(locale.get(), "app.add")}
                    </a>
                    <button class="button button--secondary" on:click=move |_| load(true)>
                        {icon("refresh")}
                        {move || t(locale.get(), "app.refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show when=move || !loading.get() fallback=|| view! { <Loader /> }>
                <Table>
                    <TableHeader>
                        {move || {
                            let locale = locale.get();
                            view! {
                                <TableRow>
                                    <SortableHeaderCell label="ID" sort_field="id" sort=sort on_sort=on_sort min_width=60.0 />
                                    <SortableHeaderCell label=t(locale, "company.name") sort_field="name" sort=sort on_sort=on_sort min_width=180.0 />
                                    <SortableHeaderCell label=t(locale, "company.country") sort_field="country" sort=sort on_sort=on_sort min_width=120.0 />
                                    <SortableHeaderCell label=t(locale, "company.city") sort_field="city" sort=sort on_sort=on_sort min_width=120.0 />
                                    <SortableHeaderCell label=t(locale, "company.address") sort_field="address" sort=sort on_sort=on_sort min_width=200.0 />
                                    <SortableHeaderCell label=t(locale, "company.position") sort_field="position" sort=sort on_sort=on_sort min_width=140.0 />
                                    <SortableHeaderCell label=t(locale, "company.client") sort_field=CLIENT_FIELD sort=sort on_sort=on_sort min_width=180.0 />
                                    <SortableHeaderCell label=t(locale, "app.createdAt") sort_field="createdAt" sort=sort on_sort=on_sort min_width=160.0 />
                                    <TableHeaderCell min_width=100.0>""</TableHeaderCell>
                                </TableRow>
                            }
                        }}
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let locale = locale.get();
                            let rows = rows.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="9">
                                            <Empty message=t(locale, "app.empty") />
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.id.clone();
                                    let edit_href = format!("/companies/company/{}", id);
                                    let client = row
                                        .user
                                        .as_ref()
                                        .map(|u| u.email.clone())
                                        .unwrap_or_else(|| t(locale, "app.no"));
                                    let row_id = row.id.clone();
                                    let row_name = row.name.clone();
                                    let row_country = row.country.clone();
                                    let row_city = row.city.clone();
                                    let row_address = row.address.clone();
                                    let row_position = row.position.clone();
                                    let created_at = format_datetime(row.created_at_utc());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row_id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_country}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_city}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row_address}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_position}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{client}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <RowActions
                                                    edit_href=edit_href
                                                    on_delete=Callback::new(move |_| handle_delete(id.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </Show>

            <SnackbarView
                snackbar=Signal::derive(move || state.with(|s| s.snackbar.clone()))
                on_close=Callback::new(move |_| state.update(|s| s.close_snackbar()))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{sort_by_state, SortState};
    use contracts::domain::a004_company::aggregate::ClientRef;

    fn company(id: &str, email: Option<&str>) -> Company {
        Company {
            id: id.into(),
            name: format!("Company {}", id),
            country: String::new(),
            city: String::new(),
            address: String::new(),
            position: String::new(),
            user: email.map(|e| ClientRef { id: id.into(), email: e.into() }),
            created_at: None,
        }
    }

    fn ids(rows: &[Company]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_client_email_ignores_case() {
        let records = vec![
            company("1", Some("bob@example.com")),
            company("2", Some("Alice@example.com")),
            company("3", None),
        ];
        let state = SortState::new(CLIENT_FIELD);

        let sorted = sort_by_state(&records, &state, &custom_comparators());
        assert_eq!(ids(&sorted), vec!["3", "2", "1"]);

        let sorted = sort_by_state(&records, &state.request_sort(CLIENT_FIELD), &custom_comparators());
        assert_eq!(ids(&sorted), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_default_order_is_case_sensitive() {
        let records = vec![company("1", Some("bob@example.com")), company("2", Some("Zed@example.com"))];
        let state = SortState::new(CLIENT_FIELD);

        assert_eq!(ids(&sort_by_state(&records, &state, &[])), vec!["2", "1"]);
        assert_eq!(ids(&sort_by_state(&records, &state, &custom_comparators())), vec!["1", "2"]);
    }
}

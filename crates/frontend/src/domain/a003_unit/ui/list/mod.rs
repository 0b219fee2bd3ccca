use contracts::domain::a003_unit::aggregate::Unit;
use contracts::domain::common::FieldKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_unit::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{confirm, Empty, ErrorBox, Loader, RowActions, SnackbarView};
use crate::shared::data_access::use_data_access;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;
use crate::shared::list_state::create_state;
use crate::shared::list_utils::{SortValue, Sortable};

impl Sortable for Unit {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "id" => SortValue::numeric(&self.id),
            "titleRU" => SortValue::text(&self.title_ru),
            "titleEN" => SortValue::text(&self.title_en),
            "createdAt" => SortValue::optional_numeric(self.created_at.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let state = create_state("id");
    let items: RwSignal<Vec<Unit>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move |refresh: bool| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_units(data_access, refresh).await {
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
            let result = api::delete_unit(data_access, id.clone()).await;
            state.update(|s| s.apply_delete_result(current_locale, &id, result));
        });
    };

    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.request_sort(&field)));
    let rows = Memo::new(move |_| state.with(|s| items.with(|list| s.visible_rows(list, &[]))));

    load(false);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || t(locale.get(), "units.title")}</h1>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href="/units/unit">
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
                            let title_key = FieldKey::localized("title", locale);
                            view! {
                                <TableRow>
                                    <SortableHeaderCell label="ID" sort_field="id" sort=sort on_sort=on_sort min_width=60.0 />
                                    <SortableHeaderCell label=t(locale, "units.name") sort_field=title_key.to_string() sort=sort on_sort=on_sort min_width=240.0 />
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
                                        <TableCell attr:colspan="4">
                                            <Empty message=t(locale, "app.empty") />
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.id.clone();
                                    let edit_href = format!("/units/unit/{}", id);
                                    let row_id = row.id.clone();
                                    let row_title = row.title(locale).to_string();
                                    let created_at = format_datetime(row.created_at_utc());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row_id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_title}</TableCellLayout></TableCell>
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
    use crate::shared::list_utils::{sort_list, Direction};
    use contracts::domain::common::Locale;

    fn unit(id: &str, title_ru: &str, created_at: Option<&str>) -> Unit {
        Unit {
            id: id.into(),
            title_ru: title_ru.into(),
            title_en: String::new(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_sort_by_created_at_numeric() {
        let records = vec![
            unit("1", "шт", Some("1571234567890")),
            unit("2", "кг", Some("999")),
            unit("3", "м", None),
        ];
        let sorted = sort_list(&records, Direction::Ascending, "createdAt");
        let ids: Vec<&str> = sorted.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_by_localized_title() {
        let records = vec![unit("1", "шт", None), unit("2", "кг", None), unit("3", "м", None)];
        let key = FieldKey::localized("title", Locale::Ru);
        let sorted = sort_list(&records, Direction::Descending, key.as_str());
        let ids: Vec<&str> = sorted.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }
}

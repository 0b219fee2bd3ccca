use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::FieldKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{confirm, Empty, ErrorBox, Loader, RowActions, SnackbarView};
use crate::shared::data_access::use_data_access;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;
use crate::shared::list_state::create_state;
use crate::shared::list_utils::{SortValue, Sortable};

const DEFAULT_SORT_FIELD: &str = "id";

impl Sortable for Category {
    fn sort_value(&self, field: &str) -> SortValue {
        if let Some(("parent", key)) = field.split_once('.') {
            return SortValue::optional_text(self.parent.as_ref().and_then(|p| p.field(key)));
        }
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
pub fn CategoryList() -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let state = create_state(DEFAULT_SORT_FIELD);
    let items: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move |refresh: bool| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_categories(data_access, refresh).await {
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
            let result = api::delete_category(data_access, id.clone()).await;
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
                    <h1 class="header__title">{move || t(locale.get(), "categories.title")}</h1>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href="/categories/category">
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
                            let parent_key = FieldKey::nested("parent", title_key.as_str());
                            view! {
                                <TableRow>
                                    <SortableHeaderCell label="ID" sort_field="id" sort=sort on_sort=on_sort min_width=60.0 />
                                    <SortableHeaderCell label=t(locale, "categories.name") sort_field=title_key.to_string() sort=sort on_sort=on_sort min_width=200.0 />
                                    <SortableHeaderCell label=t(locale, "categories.parent") sort_field=parent_key.to_string() sort=sort on_sort=on_sort min_width=200.0 />
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
                                        <TableCell attr:colspan="5">
                                            <Empty message=t(locale, "app.empty") />
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.id.clone();
                                    let edit_href = format!("/categories/category/{}", id);
                                    let parent = row
                                        .parent
                                        .as_ref()
                                        .map(|p| p.title(locale).to_string())
                                        .unwrap_or_else(|| t(locale, "app.no"));
                                    let row_id = row.id.clone();
                                    let row_title = row.title(locale).to_string();
                                    let created_at = format_datetime(row.created_at_utc());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row_id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_title}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{parent}</TableCellLayout></TableCell>
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
    use contracts::domain::common::{Locale, LocalizedTitle};

    fn category(id: &str, title_en: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.into(),
            title_ru: String::new(),
            title_en: title_en.into(),
            parent: parent.map(|p| LocalizedTitle {
                id: "0".into(),
                title_ru: String::new(),
                title_en: p.into(),
            }),
            created_at: Some(format!("15712345678{}", id)),
        }
    }

    #[test]
    fn test_sort_by_localized_parent_title() {
        let records = vec![
            category("1", "Hoses", Some("Pumps")),
            category("2", "Pumps", None),
            category("3", "Filters", Some("Drainage")),
        ];
        let title_key = FieldKey::localized("title", Locale::En);
        let parent_key = FieldKey::nested("parent", title_key.as_str());

        let sorted = sort_list(&records, Direction::Ascending, parent_key.as_str());
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let sorted = sort_list(&records, Direction::Ascending, title_key.as_str());
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_ids_sort_numerically() {
        let records = vec![category("10", "a", None), category("9", "b", None)];
        let sorted = sort_list(&records, Direction::Ascending, "id");
        assert_eq!(sorted[0].id, "9");
        assert_eq!(category("1", "", None).sort_value("parent.missing"), SortValue::Missing);
    }
}

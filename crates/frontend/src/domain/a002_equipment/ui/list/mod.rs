use contracts::domain::a002_equipment::aggregate::Equipment;
use contracts::domain::common::FieldKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a002_equipment::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{confirm, Empty, ErrorBox, Loader, SnackbarView};
use crate::shared::data_access::use_data_access;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::{t, use_locale};
use crate::shared::icons::icon;
use crate::shared::list_state::create_state;
use crate::shared::list_utils::{FieldComparator, SortValue, Sortable};

const DEFAULT_SORT_FIELD: &str = "id";
const KITS_FIELD: &str = "kits";

impl Sortable for Equipment {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "id" => SortValue::numeric(&self.id),
            "titleRU" => SortValue::text(&self.title_ru),
            "titleEN" => SortValue::text(&self.title_en),
            "vendorCode" => self.vendor_code.into(),
            "code" => SortValue::text(&self.code),
            "basePrice" => self.base_price.into(),
            "margin" => self.margin.into(),
            "priceType" => SortValue::text(&self.price_type),
            "currency.title" => {
                SortValue::optional_text(self.currency.as_ref().map(|c| c.title.as_str()))
            }
            "createdAt" => SortValue::optional_numeric(self.created_at.as_deref()),
            _ => SortValue::Missing,
        }
    }
}

/// Комплекты сравниваются по числу позиций
fn compare_kits(a: &Equipment, b: &Equipment) -> Ordering {
    a.kits.len().cmp(&b.kits.len())
}

fn custom_comparators() -> [(&'static str, FieldComparator<Equipment>); 1] {
    [(KITS_FIELD, compare_kits)]
}

fn format_price(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn EquipmentList() -> impl IntoView {
    let data_access = use_data_access();
    let locale = use_locale();
    let state = create_state(DEFAULT_SORT_FIELD);
    let items: RwSignal<Vec<Equipment>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move |refresh: bool| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_equipment(data_access, refresh).await {
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
            let result = api::delete_equipment(data_access, id.clone()).await;
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
                    <h1 class="header__title">{move || t(locale.get(), "equipment.title")}</h1>
                </div>
                <div class="header__actions">
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
                                    <SortableHeaderCell label=t(locale, "equipment.name") sort_field=title_key.to_string() sort=sort on_sort=on_sort min_width=200.0 />
                                    <SortableHeaderCell label=t(locale, "equipment.vendorCode") sort_field="vendorCode" sort=sort on_sort=on_sort min_width=100.0 align="right" />
                                    <SortableHeaderCell label=t(locale, "equipment.code") sort_field="code" sort=sort on_sort=on_sort min_width=100.0 />
                                    <SortableHeaderCell label=t(locale, "equipment.basePrice") sort_field="basePrice" sort=sort on_sort=on_sort min_width=110.0 align="right" />
                                    <SortableHeaderCell label=t(locale, "equipment.currency") sort_field="currency.title" sort=sort on_sort=on_sort min_width=80.0 />
                                    <SortableHeaderCell label=t(locale, "equipment.kits") sort_field=KITS_FIELD sort=sort on_sort=on_sort min_width=80.0 align="right" />
                                    <SortableHeaderCell label=t(locale, "app.createdAt") sort_field="createdAt" sort=sort on_sort=on_sort min_width=160.0 />
                                    <TableHeaderCell min_width=60.0>""</TableHeaderCell>
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
                                    let vendor_code = row.vendor_code.map(|v| v.to_string()).unwrap_or_default();
                                    let currency = row.currency.as_ref().map(|c| c.title.clone()).unwrap_or_default();
                                    let row_id = row.id.clone();
                                    let row_title = row.title(locale).to_string();
                                    let row_code = row.code.clone();
                                    let base_price = format_price(row.base_price);
                                    let kits_len = row.kits.len();
                                    let created_at = format_datetime(row.created_at_utc());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row_id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_title}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{vendor_code}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row_code}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{base_price}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{currency}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{kits_len}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title=t(locale, "app.delete")
                                                    on:click=move |_| handle_delete(id.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
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
    use crate::shared::list_state::ListState;
    use contracts::domain::a002_equipment::aggregate::{Currency, Kit};

    fn equipment(id: &str, vendor_code: Option<i64>, currency: Option<&str>, kits: usize) -> Equipment {
        Equipment {
            id: id.into(),
            title_ru: String::new(),
            title_en: format!("Item {}", id),
            vendor_code,
            code: String::new(),
            base_price: Some(10.0),
            margin: None,
            price_type: "fixed".into(),
            groups: Vec::new(),
            param_values: Vec::new(),
            currency: currency.map(|title| Currency { id: "1".into(), title: title.into() }),
            created_at: None,
            kits: (0..kits)
                .map(|i| Kit { id: i.to_string(), quantity: 1, child: None })
                .collect(),
        }
    }

    fn ids(rows: &[Equipment]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_vendor_code_numeric_with_missing_first() {
        let records = vec![
            equipment("1", Some(100), None, 0),
            equipment("2", None, None, 0),
            equipment("3", Some(20), None, 0),
        ];
        let mut state = ListState::new("vendorCode");
        assert_eq!(ids(&state.visible_rows(&records, &custom_comparators())), vec!["2", "3", "1"]);

        state.request_sort("vendorCode");
        assert_eq!(ids(&state.visible_rows(&records, &custom_comparators())), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_kits_use_custom_comparator() {
        let records = vec![
            equipment("1", None, Some("USD"), 2),
            equipment("2", None, Some("EUR"), 0),
            equipment("3", None, None, 1),
        ];
        let state = ListState::new(KITS_FIELD);
        assert_eq!(ids(&state.visible_rows(&records, &custom_comparators())), vec!["2", "3", "1"]);

        let state = ListState::new("currency.title");
        assert_eq!(ids(&state.visible_rows(&records, &custom_comparators())), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(12.5)), "12.50");
        assert_eq!(format_price(None), "-");
    }
}
